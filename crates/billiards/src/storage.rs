//! A classified code pair bound to its geometric witness.
//!
//! Purpose
//! - Stable codes exist on an open convex region (`ConvexPolygon`); unstable
//!   codes only on a segment cut out by their stability constraint. `Storage`
//!   carries either witness together with the boundary equations from the
//!   backend, behind one query surface (intersection, bounding box, exact
//!   region membership).
//!
//! Conventions
//! - Identity is the code sequence alone. Two storages for the same sequence
//!   compare equal even when their angles or geometry differ; geometry is
//!   derived data.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::backend::Backend;
use crate::cfg::POSITIVE_EPS;
use crate::codeseq::{CodePair, CodeSequence, CodeType};
use crate::geom::{ConvexPolygon, Interval, LineSegment, Rectangle};
use crate::math::{Equation, LinCom, XyEta};
use crate::{Error, Result};

/// Geometric witness of a code pair.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Stable {
        polygon: ConvexPolygon,
    },
    Unstable {
        segment: LineSegment,
        constraint: LinCom<XyEta>,
    },
}

/// Built once; fields are read through accessors only.
#[derive(Clone, Debug)]
pub struct Storage {
    code: CodePair,
    code_type: CodeType,
    equations: Vec<Equation>,
    shape: Shape,
}

impl Storage {
    /// `code` must classify as a stable type.
    pub fn stable(
        code: CodePair,
        equations: Vec<Equation>,
        polygon: ConvexPolygon,
    ) -> Result<Self> {
        let code_type = code.sequence.code_type()?;
        if !code_type.is_stable() {
            return Err(Error::ShapeMismatch {
                code_type,
                variant: "stable",
            });
        }
        Ok(Self {
            code,
            code_type,
            equations,
            shape: Shape::Stable { polygon },
        })
    }

    /// `code` must classify as an unstable type. The constraint is derived
    /// from `code` with its own initial angles.
    pub fn unstable(
        code: CodePair,
        equations: Vec<Equation>,
        segment: LineSegment,
    ) -> Result<Self> {
        let code_type = code.sequence.code_type()?;
        if code_type.is_stable() {
            return Err(Error::ShapeMismatch {
                code_type,
                variant: "unstable",
            });
        }
        let constraint = code.constraint()?;
        Ok(Self {
            code,
            code_type,
            equations,
            shape: Shape::Unstable {
                segment,
                constraint,
            },
        })
    }

    /// Ask `backend` for the region of `code` and build the matching variant.
    ///
    /// `Ok(None)` when the backend has no answer. Stable types take every
    /// returned point as a polygon vertex; unstable types need exactly two.
    pub fn load(code: &CodePair, backend: &dyn Backend) -> Result<Option<Self>> {
        let Some(info) = backend.load_code_info(code)? else {
            tracing::debug!(code = %code, "backend has no region");
            return Ok(None);
        };
        let equations: Vec<Equation> = info.equations().cloned().collect();
        let storage = if code.sequence.code_type()?.is_stable() {
            let polygon = ConvexPolygon::new(info.points)?;
            Self::stable(code.clone(), equations, polygon)?
        } else {
            let segment = LineSegment::from_points(&info.points)?;
            Self::unstable(code.clone(), equations, segment)?
        };
        tracing::debug!(
            code = %code,
            code_type = %storage.code_type,
            equations = storage.equations.len(),
            "loaded storage"
        );
        Ok(Some(storage))
    }

    #[inline]
    pub fn code(&self) -> &CodePair {
        &self.code
    }

    #[inline]
    pub fn sequence(&self) -> &CodeSequence {
        &self.code.sequence
    }

    #[inline]
    pub fn code_type(&self) -> CodeType {
        self.code_type
    }

    #[inline]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn is_stable(&self) -> bool {
        matches!(self.shape, Shape::Stable { .. })
    }

    pub fn polygon(&self) -> Option<&ConvexPolygon> {
        match &self.shape {
            Shape::Stable { polygon } => Some(polygon),
            Shape::Unstable { .. } => None,
        }
    }

    pub fn segment(&self) -> Option<&LineSegment> {
        match &self.shape {
            Shape::Unstable { segment, .. } => Some(segment),
            Shape::Stable { .. } => None,
        }
    }

    pub fn constraint(&self) -> Option<LinCom<XyEta>> {
        match self.shape {
            Shape::Unstable { constraint, .. } => Some(constraint),
            Shape::Stable { .. } => None,
        }
    }

    pub fn intersects_rect(&self, rect: &Rectangle) -> bool {
        match &self.shape {
            Shape::Stable { polygon } => polygon.intersects_rect(rect),
            Shape::Unstable { segment, .. } => segment.intersects_rect(rect),
        }
    }

    pub fn intersects_polygon(&self, other: &ConvexPolygon) -> bool {
        match &self.shape {
            Shape::Stable { polygon } => polygon.intersects_polygon(other),
            Shape::Unstable { segment, .. } => segment.intersects_polygon(other),
        }
    }

    fn project_x(&self) -> Interval {
        match &self.shape {
            Shape::Stable { polygon } => polygon.project_x(),
            Shape::Unstable { segment, .. } => segment.project_x(),
        }
    }

    fn project_y(&self) -> Interval {
        match &self.shape {
            Shape::Stable { polygon } => polygon.project_y(),
            Shape::Unstable { segment, .. } => segment.project_y(),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.project_x().min()
    }

    pub fn max_x(&self) -> f64 {
        self.project_x().max()
    }

    pub fn min_y(&self) -> f64 {
        self.project_y().min()
    }

    pub fn max_y(&self) -> f64 {
        self.project_y().max()
    }

    /// Every boundary equation is `>= -POSITIVE_EPS` at `(x, y)`.
    pub fn is_positive(&self, x: f64, y: f64) -> bool {
        self.equations
            .iter()
            .all(|eq| eq.evalf(x, y) >= -POSITIVE_EPS)
    }
}

impl PartialEq for Storage {
    fn eq(&self, other: &Self) -> bool {
        self.sequence() == other.sequence()
    }
}

impl Eq for Storage {}

impl PartialOrd for Storage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Storage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sequence().cmp(other.sequence())
    }
}

impl Hash for Storage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CodeInfo, CoverDescriptor};
    use crate::codeseq::InitialAngles;
    use crate::geom::Point;
    use crate::math::Trig;
    use std::collections::{BTreeSet, HashMap, HashSet};
    use std::f64::consts::FRAC_PI_2;
    use std::path::Path;

    /// Serves canned `CodeInfo` text keyed by `"<seq>, <angles>"`.
    #[derive(Default)]
    struct CannedBackend {
        answers: HashMap<String, (String, String, String)>,
    }

    impl CannedBackend {
        fn with(mut self, pair: &CodePair, points: &str, sin: &str, cos: &str) -> Self {
            self.answers
                .insert(pair.to_string(), (points.into(), sin.into(), cos.into()));
            self
        }
    }

    impl Backend for CannedBackend {
        fn load_code_info(&self, pair: &CodePair) -> Result<Option<CodeInfo>> {
            self.answers
                .get(&pair.to_string())
                .map(|(p, s, c)| CodeInfo::parse(p, s, c))
                .transpose()
        }

        fn check_square(
            &self,
            _square: CoverDescriptor,
            _pair: &CodePair,
            _cover_dir: &Path,
        ) -> Result<Option<String>> {
            Ok(None)
        }
    }

    fn pair(raw: &[i32]) -> CodePair {
        CodePair::new(CodeSequence::new(raw).unwrap(), InitialAngles::XY)
    }

    #[test]
    fn load_stable_builds_polygon() {
        let code = pair(&[1, 1, 1]);
        let backend = CannedBackend::default().with(
            &code,
            "1/4 1/4\n3/4 1/4\n1/2 3/4\n",
            "1 1 0\n",
            "1 0 0\n",
        );
        let s = Storage::load(&code, &backend).unwrap().unwrap();
        assert!(s.is_stable());
        assert_eq!(s.code_type(), CodeType::OpenStableOdd);
        assert_eq!(s.code(), &code);
        assert_eq!(s.equations().len(), 2);
        assert_eq!(s.equations()[0].trig(), Trig::Sin);
        assert_eq!(s.polygon().unwrap().vertices().len(), 3);
        assert!(s.segment().is_none());
        assert!(s.constraint().is_none());

        assert!((s.min_x() - FRAC_PI_2 / 4.0).abs() < 1e-12);
        assert!((s.max_x() - 3.0 * FRAC_PI_2 / 4.0).abs() < 1e-12);
        assert!((s.max_y() - 3.0 * FRAC_PI_2 / 4.0).abs() < 1e-12);

        let inside = Rectangle::new(0.6, 0.7, 0.5, 0.6);
        let far = Rectangle::new(1.4, 1.5, 0.0, 0.1);
        assert!(s.intersects_rect(&inside));
        assert!(!s.intersects_rect(&far));
    }

    #[test]
    fn load_unstable_builds_segment_and_constraint() {
        let code = pair(&[2, 2]);
        let backend = CannedBackend::default().with(&code, "0 0\n1 1\n", "", "");
        let s = Storage::load(&code, &backend).unwrap().unwrap();
        assert!(!s.is_stable());
        assert_eq!(s.code_type(), CodeType::ClosedNotStable);
        assert_eq!(s.constraint(), Some(LinCom::new([1, -1, 0])));
        let seg = s.segment().unwrap();
        assert_eq!(seg.end, Point::new(FRAC_PI_2, FRAC_PI_2));
        assert_eq!((s.min_y(), s.max_y()), (0.0, FRAC_PI_2));
        // the diagonal crosses the centre square but misses a corner one
        assert!(s.intersects_rect(&Rectangle::new(0.7, 0.9, 0.7, 0.9)));
        assert!(!s.intersects_rect(&Rectangle::new(1.2, 1.5, 0.0, 0.3)));
        // no equations: every point is in the exact region
        assert!(s.is_positive(0.1, 1.4));
    }

    #[test]
    fn load_reports_missing_and_malformed_answers() {
        let code = pair(&[2, 2]);
        assert_eq!(
            Storage::load(&code, &CannedBackend::default()).unwrap(),
            None
        );
        let three = CannedBackend::default().with(&code, "0 0\n1 1\n1 0\n", "", "");
        assert_eq!(
            Storage::load(&code, &three),
            Err(Error::SegmentPointCount(3))
        );
        let stable = pair(&[1, 1, 1]);
        let two = CannedBackend::default().with(&stable, "0 0\n1 1\n", "", "");
        assert_eq!(Storage::load(&stable, &two), Err(Error::TooFewVertices(2)));
    }

    #[test]
    fn is_positive_uses_tolerance() {
        // sin(x - y) vanishes on the diagonal
        let eq = Equation::parse_line(Trig::Sin, "1 1 -1").unwrap();
        let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let s = Storage::unstable(pair(&[2, 2]), vec![eq], seg).unwrap();
        assert!(s.is_positive(0.5, 0.5));
        assert!(s.is_positive(0.5, 0.5 + 1e-15));
        assert!(!s.is_positive(0.5, 0.5 + 1e-9));
        assert!(s.is_positive(0.6, 0.5));
    }

    fn unit_square() -> ConvexPolygon {
        ConvexPolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn variant_must_match_code_type() {
        let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert_eq!(
            Storage::stable(pair(&[2, 2]), vec![], unit_square()).unwrap_err(),
            Error::ShapeMismatch {
                code_type: CodeType::ClosedNotStable,
                variant: "stable",
            }
        );
        assert_eq!(
            Storage::unstable(pair(&[1, 1, 1]), vec![], seg).unwrap_err(),
            Error::ShapeMismatch {
                code_type: CodeType::OpenStableOdd,
                variant: "unstable",
            }
        );
        let s = Storage::stable(pair(&[1, 1, 1]), vec![], unit_square()).unwrap();
        assert_eq!(s.code_type(), CodeType::OpenStableOdd);
        assert!(matches!(s.shape(), Shape::Stable { .. }));
    }

    #[test]
    fn intersects_polygon_for_both_variants() {
        let near = ConvexPolygon::new(vec![
            Point::new(0.5, 0.5),
            Point::new(1.5, 0.5),
            Point::new(0.5, 1.5),
        ])
        .unwrap();
        let far = ConvexPolygon::new(vec![
            Point::new(1.2, 0.0),
            Point::new(1.5, 0.0),
            Point::new(1.5, 0.3),
        ])
        .unwrap();

        let stable = Storage::stable(pair(&[1, 1, 1]), vec![], unit_square()).unwrap();
        assert!(stable.intersects_polygon(&near));
        assert!(!stable.intersects_polygon(&far));

        let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let unstable = Storage::unstable(pair(&[2, 2]), vec![], seg).unwrap();
        assert!(unstable.intersects_polygon(&near));
        assert!(!unstable.intersects_polygon(&far));
    }

    #[test]
    fn identity_is_the_sequence() {
        let tri = ConvexPolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();
        let a = Storage::stable(pair(&[1, 1, 1]), vec![], unit_square()).unwrap();
        let zy = CodePair::new(CodeSequence::new(&[1, 1, 1]).unwrap(), "zy".parse().unwrap());
        let b = Storage::stable(zy, vec![], tri).unwrap();
        assert_ne!(a.code(), b.code());
        assert_eq!(a, b);
        let hashed: HashSet<&Storage> = [&a, &b].into_iter().collect();
        assert_eq!(hashed.len(), 1);

        let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let c = Storage::unstable(pair(&[2, 2]), vec![], seg).unwrap();
        assert!(c < a);
        let ordered: BTreeSet<&Storage> = [&a, &c].into_iter().collect();
        assert_eq!(ordered.into_iter().next(), Some(&c));
    }
}
