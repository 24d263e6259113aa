//! Basic planar geometry primitives for map rendering.

/// Error raised when a geometry value would violate its construction contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A polyline or ring was finalized without any points.
    #[error("polyline must contain at least one point")]
    EmptyPolyLine,
}

/// Representation of a 2D point.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// An open sequence of connected line segments.
///
/// The vertex list is copied on construction and never handed out mutably.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Open {
    points: Vec<Point>,
}

impl Open {
    /// Creates an open polyline from a list of vertices, copying them.
    pub fn new(points: &[Point]) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPolyLine);
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the total length of all segments.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance(pair[0], pair[1]))
            .sum()
    }
}

/// A closed ring of vertices; index `n` wraps around to index `0`.
///
/// The closing vertex is implicit: a square is stored as four points, not five.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Closed {
    points: Vec<Point>,
}

impl Closed {
    /// Creates a closed ring from a list of vertices, copying them.
    pub fn new(points: &[Point]) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPolyLine);
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Calculates the enclosed area using the shoelace formula.
    ///
    /// The result is the absolute value of the signed sum, so vertex
    /// orientation does not matter. A degenerate ring has area zero.
    pub fn area(&self) -> f64 {
        let pts = &self.points;
        let mut sum = 0.0;
        for i in 0..pts.len() {
            let j = (i + 1) % pts.len();
            sum += pts[i].x * pts[j].y - pts[j].x * pts[i].y;
        }
        sum.abs() * 0.5
    }

    /// Tests whether `p` lies strictly inside the ring.
    ///
    /// Winding count over the wraparound edges. The straddle test is half-open
    /// (`a.y <= p.y < b.y`) so horizontal edges and shared vertices are never
    /// counted twice. A single-point ring contains nothing.
    pub fn contains(&self, p: Point) -> bool {
        let pts = &self.points;
        let mut winding = 0i32;
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            if a.y <= p.y {
                if b.y > p.y && is_left(a, b, p) > 0.0 {
                    winding += 1;
                }
            } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
                winding -= 1;
            }
        }
        winding != 0
    }
}

/// Cross product sign of `p` relative to the directed edge `a -> b`.
fn is_left(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// A polyline that is either an open chain or a closed ring.
///
/// Area and containment are deliberately only available on [`Closed`]; an
/// open chain has no interior.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PolyLine {
    Open(Open),
    Closed(Closed),
}

impl PolyLine {
    pub fn points(&self) -> &[Point] {
        match self {
            PolyLine::Open(line) => line.points(),
            PolyLine::Closed(ring) => ring.points(),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, PolyLine::Closed(_))
    }
}

/// Incremental vertex accumulator finalized as either polyline variant.
#[derive(Debug, Default, Clone)]
pub struct PolyLineBuilder {
    points: Vec<Point>,
}

impl PolyLineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn build_open(self) -> Result<Open, GeometryError> {
        Open::new(&self.points)
    }

    pub fn build_closed(self) -> Result<Closed, GeometryError> {
        Closed::new(&self.points)
    }
}

/// A polygon as one closed shell plus zero or more closed holes.
///
/// Holes are assumed to lie inside the shell and to be mutually disjoint;
/// this is not verified at runtime.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polygon {
    pub shell: Closed,
    pub holes: Vec<Closed>,
}

impl Polygon {
    pub fn new(shell: Closed, holes: Vec<Closed>) -> Self {
        Self { shell, holes }
    }

    /// Tests whether `p` lies inside the shell but outside every hole.
    pub fn contains(&self, p: Point) -> bool {
        self.shell.contains(p) && !self.holes.iter().any(|h| h.contains(p))
    }
}
