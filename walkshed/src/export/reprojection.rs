use super::ExportError;
use geo::{Coord, MapCoords, Polygon};
use proj4rs::{proj::Proj as Proj4, transform::transform};

/// converts coordinates between two PROJ.4 coordinate systems. geographic
/// coordinate systems are read and written in degrees.
pub struct Reprojection {
    from: Proj4,
    to: Proj4,
    from_latlong: bool,
    to_latlong: bool,
}

impl Reprojection {
    pub fn new(source_proj4: &str, target_proj4: &str) -> Result<Reprojection, ExportError> {
        let from = Proj4::from_proj_string(source_proj4).map_err(|e| {
            ExportError::InvalidProjection(source_proj4.to_string(), e.to_string())
        })?;
        let to = Proj4::from_proj_string(target_proj4).map_err(|e| {
            ExportError::InvalidProjection(target_proj4.to_string(), e.to_string())
        })?;
        Ok(Reprojection {
            from,
            to,
            from_latlong: is_latlong(source_proj4),
            to_latlong: is_latlong(target_proj4),
        })
    }

    pub fn project_coord(&self, coord: Coord<f64>) -> Result<Coord<f64>, ExportError> {
        let mut point = if self.from_latlong {
            (coord.x.to_radians(), coord.y.to_radians(), 0.0)
        } else {
            (coord.x, coord.y, 0.0)
        };
        transform(&self.from, &self.to, &mut point)
            .map_err(|e| ExportError::ReprojectionError(coord.x, coord.y, e.to_string()))?;
        if self.to_latlong {
            Ok(Coord {
                x: point.0.to_degrees(),
                y: point.1.to_degrees(),
            })
        } else {
            Ok(Coord {
                x: point.0,
                y: point.1,
            })
        }
    }

    pub fn project_polygon(&self, polygon: &Polygon<f64>) -> Result<Polygon<f64>, ExportError> {
        polygon.try_map_coords(|coord| self.project_coord(coord))
    }
}

fn is_latlong(proj4: &str) -> bool {
    proj4
        .split_whitespace()
        .any(|arg| matches!(arg, "+proj=longlat" | "+proj=latlong" | "+proj=lonlat" | "+proj=latlon"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NY_LONG_ISLAND_FT, WGS84};

    #[test]
    fn test_state_plane_origin_to_wgs84() {
        let reprojection = Reprojection::new(NY_LONG_ISLAND_FT, WGS84).unwrap();
        // false easting of 300000 m lands on the central meridian at the origin latitude
        let origin = Coord {
            x: 300_000.0 / 0.3048006096012192,
            y: 0.0,
        };
        let projected = reprojection.project_coord(origin).unwrap();
        assert!((projected.x - -74.0).abs() < 1e-6, "{projected:?}");
        assert!((projected.y - 40.1666666666667).abs() < 1e-6, "{projected:?}");
    }

    #[test]
    fn test_lower_manhattan_lands_in_manhattan() {
        let reprojection = Reprojection::new(NY_LONG_ISLAND_FT, WGS84).unwrap();
        let projected = reprojection
            .project_coord(Coord {
                x: 981_000.0,
                y: 197_000.0,
            })
            .unwrap();
        assert!(projected.x > -74.05 && projected.x < -73.95, "{projected:?}");
        assert!(projected.y > 40.68 && projected.y < 40.76, "{projected:?}");
    }

    #[test]
    fn test_invalid_projection() {
        let result = Reprojection::new("+proj=nonsense", WGS84);
        assert!(matches!(result, Err(ExportError::InvalidProjection(_, _))));
    }
}
