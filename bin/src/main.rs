#[macro_use]
extern crate log;

mod options;

use clap::Parser;
use options::Options;
use raymann_core::geometry::*;
use raymann_core::interaction::*;
use raymann_core::primitive::*;
use raymann_shapes::Sphere;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    match probe(&options) {
        Ok(Some(isect)) => {
            println!(
                "hit t={} point={:?} normal={:?}",
                isect.t_hit(),
                isect.hit_point(),
                isect.normal()
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("miss");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Build the sphere and ray described by `options` and intersect them.
fn probe(options: &Options) -> Result<Option<Intersection>, String> {
    let s = options.scale;
    let m = translate(&options.translate) * scale(s.x, s.y, s.z);
    let transformer = Transformer::new(m).map_err(|e| format!("invalid transform: {e}"))?;

    let sphere = Sphere::new(transformer, options.center, options.radius)
        .map_err(|e| format!("invalid sphere: {e}"))?;

    let ray = Ray::with_interval(options.origin, options.direction, options.t_min, options.t_max)
        .map_err(|e| format!("invalid ray: {e}"))?;
    info!("Probing {:?} against {:?}", ray, sphere);

    let mut isect = Intersection::default();
    Ok(sphere.intersect(&ray, &mut isect).then_some(isect))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("raymann").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_probe_hits() {
        let isect = probe(&options(&[])).unwrap().unwrap();
        assert_eq!(isect.t_hit(), 4.0);
    }

    #[test]
    fn probe_misses() {
        assert!(probe(&options(&["--origin", "0,2,-5"])).unwrap().is_none());
    }

    #[test]
    fn probe_reports_invalid_input() {
        assert!(probe(&options(&["--radius", "-1"])).is_err());
        assert!(probe(&options(&["--scale", "1,0,1"])).is_err());
        assert!(probe(&options(&["--t-min", "2", "--t-max", "1"])).is_err());
    }
}
