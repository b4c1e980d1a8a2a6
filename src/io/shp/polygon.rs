use geo::{Coord, LineString, MultiPolygon, Polygon};
use shapefile as shp;

/// Rebuild polygons from shapefile rings.
///
/// Shapefiles list each outer ring (clockwise) followed by its holes
/// (counter-clockwise); a hole before any outer ring is promoted to one.
pub(crate) fn rings_to_multipolygon(polygon: &shp::Polygon) -> MultiPolygon<f64> {
    let mut polygons: Vec<Polygon<f64>> = Vec::new();
    let mut outer: Option<LineString<f64>> = None;
    let mut holes: Vec<LineString<f64>> = Vec::new();

    for ring in polygon.rings() {
        let line = closed(ring.points().iter().map(|p| Coord { x: p.x, y: p.y }).collect());
        let clockwise = twice_signed_area(&line.0) < 0.0;

        if clockwise || outer.is_none() {
            if let Some(previous) = outer.replace(line) {
                polygons.push(Polygon::new(previous, std::mem::take(&mut holes)));
            }
        } else {
            holes.push(line);
        }
    }
    if let Some(last) = outer {
        polygons.push(Polygon::new(last, holes));
    }

    MultiPolygon(polygons)
}

fn closed(mut coords: Vec<Coord<f64>>) -> LineString<f64> {
    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if first != last { coords.push(first) }
    }
    LineString(coords)
}

/// Shoelace sum; negative for clockwise rings.
fn twice_signed_area(coords: &[Coord<f64>]) -> f64 {
    coords.windows(2).map(|w| w[0].x * w[1].y - w[1].x * w[0].y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapefile::{Point, PolygonRing};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn groups_holes_with_their_outer_ring() {
        let polygon = shp::Polygon::with_rings(vec![
            PolygonRing::Outer(pts(&[(0., 0.), (0., 4.), (4., 4.), (4., 0.), (0., 0.)])),
            PolygonRing::Inner(pts(&[(1., 1.), (2., 1.), (2., 2.), (1., 2.), (1., 1.)])),
            PolygonRing::Outer(pts(&[(10., 10.), (10., 11.), (11., 11.), (11., 10.), (10., 10.)])),
        ]);

        let mp = rings_to_multipolygon(&polygon);
        assert_eq!(mp.0.len(), 2);
        assert_eq!(mp.0[0].interiors().len(), 1);
        assert_eq!(mp.0[1].interiors().len(), 0);
        assert_eq!(mp.0[1].exterior().0[0], Coord { x: 10.0, y: 10.0 });
    }

    #[test]
    fn clockwise_ring_has_negative_area() {
        let square = [
            Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 },
            Coord { x: 1.0, y: 1.0 }, Coord { x: 1.0, y: 0.0 }, Coord { x: 0.0, y: 0.0 },
        ];
        assert_eq!(twice_signed_area(&square), -2.0);
    }
}
