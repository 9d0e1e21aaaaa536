use glam::Vec3;

use crate::enemy::EnemyId;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Distance along a unit-direction ray to the first point inside the
    /// box, or `None` if the ray misses within `max_distance`. A ray that
    /// starts inside the box hits at distance 0.
    pub fn ray_distance(&self, ray: &Ray, max_distance: f32) -> Option<f32> {
        let mut t_near = 0.0_f32;
        let mut t_far = max_distance;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            let (min, max) = (self.min[axis], self.max[axis]);

            if direction.abs() < f32::EPSILON {
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction;
            let mut t0 = (min - origin) * inv;
            let mut t1 = (max - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        Some(t_near)
    }
}

/// A ray with a unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing the direction. Zero or non-finite
    /// directions yield `None`.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        origin.is_finite().then_some(Self { origin, direction })
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Something a shot can hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTarget {
    pub id: EnemyId,
    pub bounds: Aabb,
}

/// Nearest intersection found by [`trace`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: EnemyId,
    pub distance: f32,
    pub point: Vec3,
}

/// Cast a ray against every target and return the nearest hit within range
pub fn trace(ray: &Ray, targets: &[HitTarget], max_distance: f32) -> Option<Hit> {
    let mut closest: Option<Hit> = None;

    for target in targets {
        let Some(distance) = target.bounds.ray_distance(ray, max_distance) else {
            continue;
        };
        if closest.map_or(true, |hit| distance < hit.distance) {
            closest = Some(Hit {
                id: target.id,
                distance,
                point: ray.at(distance),
            });
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use canopy_ecs::Entity;

    use super::*;

    fn target(index: u32, center: Vec3) -> HitTarget {
        HitTarget {
            id: EnemyId(Entity::from_raw(index, 0)),
            bounds: Aabb::from_center(center, Vec3::new(0.6, 1.0, 0.6)),
        }
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z).unwrap()
    }

    #[test]
    fn test_nearest_target_wins() {
        let far = target(0, Vec3::new(0.0, 1.0, -30.0));
        let near = target(1, Vec3::new(0.0, 1.0, -10.0));

        let hit = trace(&forward_ray(), &[far, near], 2000.0).unwrap();
        assert_eq!(hit.id, near.id);
        assert!((hit.distance - 9.4).abs() < 1e-4);
        assert!((hit.point.z + 9.4).abs() < 1e-4);
    }

    #[test]
    fn test_miss_to_the_side_and_behind() {
        let beside = target(0, Vec3::new(5.0, 1.0, -10.0));
        let behind = target(1, Vec3::new(0.0, 1.0, 10.0));
        assert!(trace(&forward_ray(), &[beside, behind], 2000.0).is_none());
    }

    #[test]
    fn test_out_of_range() {
        let distant = target(0, Vec3::new(0.0, 1.0, -50.0));
        assert!(trace(&forward_ray(), &[distant], 20.0).is_none());
    }

    #[test]
    fn test_ray_starting_inside_hits_at_zero() {
        let around = target(0, Vec3::new(0.0, 1.0, 0.0));
        let hit = trace(&forward_ray(), &[around], 2000.0).unwrap();
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_oblique_ray() {
        let ray = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(1.0, 0.0, -1.0)).unwrap();
        let hit = trace(&ray, &[target(0, Vec3::new(10.0, 1.0, -10.0))], 2000.0);
        assert!(hit.is_some());
    }

    #[test]
    fn test_degenerate_ray_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
        assert!(Ray::new(Vec3::splat(f32::NAN), Vec3::X).is_none());
    }
}
