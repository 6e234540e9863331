//! Command line options

use clap::Parser;
use raymann_core::base::{Float, INFINITY, RAY_EPSILON};
use raymann_core::geometry::{point3, vector3, Point3f, Vector3f};

/// Probe a single ray against a transformed sphere.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Ray origin in world space.
    #[arg(
        long,
        value_name = "X,Y,Z",
        default_value = "0,0,-5",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub origin: Point3f,

    /// Ray direction in world space.
    #[arg(
        long,
        value_name = "X,Y,Z",
        default_value = "0,0,1",
        value_parser = parse_vector,
        allow_hyphen_values = true
    )]
    pub direction: Vector3f,

    /// Sphere center in object space.
    #[arg(
        long,
        value_name = "X,Y,Z",
        default_value = "0,0,0",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub center: Point3f,

    /// Sphere radius in object space.
    #[arg(long, value_name = "FLOAT", default_value_t = 1.0, allow_hyphen_values = true)]
    pub radius: Float,

    /// Per-axis scale applied before translation.
    #[arg(
        long,
        value_name = "X,Y,Z",
        default_value = "1,1,1",
        value_parser = parse_vector,
        allow_hyphen_values = true
    )]
    pub scale: Vector3f,

    /// Translation of the sphere into world space.
    #[arg(
        long,
        value_name = "X,Y,Z",
        default_value = "0,0,0",
        value_parser = parse_vector,
        allow_hyphen_values = true
    )]
    pub translate: Vector3f,

    /// Start of the ray interval.
    #[arg(long = "t-min", value_name = "FLOAT", default_value_t = RAY_EPSILON, allow_hyphen_values = true)]
    pub t_min: Float,

    /// End of the ray interval (exclusive).
    #[arg(
        long = "t-max",
        value_name = "FLOAT",
        default_value_t = INFINITY,
        allow_hyphen_values = true
    )]
    pub t_max: Float,
}

/// Parse "x,y,z" into three floats.
///
/// * `s` - The text to parse.
fn parse_triple(s: &str) -> Result<[Float; 3], String> {
    let values = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<Float>()
                .map_err(|e| format!("invalid value '{}': {e}", v.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values[..] {
        [x, y, z] => Ok([x, y, z]),
        _ => Err(format!("expected 3 comma separated values, got {}", values.len())),
    }
}

fn parse_point(s: &str) -> Result<Point3f, String> {
    parse_triple(s).map(|[x, y, z]| point3(x, y, z))
}

fn parse_vector(s: &str) -> Result<Vector3f, String> {
    parse_triple(s).map(|[x, y, z]| vector3(x, y, z))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triples() {
        assert_eq!(parse_point("1,2,3"), Ok(point3(1.0, 2.0, 3.0)));
        assert_eq!(parse_vector(" -1.5, 0 ,2e1"), Ok(vector3(-1.5, 0.0, 20.0)));
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,2,3,4").is_err());
        assert!(parse_triple("1,b,3").is_err());
    }

    #[test]
    fn defaults() {
        let o = Options::try_parse_from(["raymann"]).unwrap();
        assert_eq!(o.origin, point3(0.0, 0.0, -5.0));
        assert_eq!(o.direction, vector3(0.0, 0.0, 1.0));
        assert_eq!(o.radius, 1.0);
        assert_eq!(o.scale, vector3(1.0, 1.0, 1.0));
        assert_eq!(o.t_min, RAY_EPSILON);
        assert_eq!(o.t_max, INFINITY);
    }

    #[test]
    fn negative_values() {
        let o = Options::try_parse_from([
            "raymann",
            "--origin",
            "-1,-2,-3",
            "--translate",
            "-4,0,0",
            "--t-min",
            "-1",
        ])
        .unwrap();
        assert_eq!(o.origin, point3(-1.0, -2.0, -3.0));
        assert_eq!(o.translate, vector3(-4.0, 0.0, 0.0));
        assert_eq!(o.t_min, -1.0);
    }

    #[test]
    fn negative_interval() {
        let o = Options::try_parse_from(["raymann", "--t-min", "-5", "--t-max", "-1"]).unwrap();
        assert_eq!(o.t_min, -5.0);
        assert_eq!(o.t_max, -1.0);
    }

    #[test]
    fn rejects_bad_triple() {
        assert!(Options::try_parse_from(["raymann", "--center", "1,2"]).is_err());
    }
}
