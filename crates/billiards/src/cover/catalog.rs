//! Parsers for cover catalogs (`polygon.txt`, `stables.txt`, `triples.txt`,
//! `cover.txt`). Everything here works on text; reading the files is the
//! caller's job.
//!
//! Formats
//! - Polygon: one vertex per line, `"X Y"` in rational multiples of `π/2`.
//! - Stables: `"i: seq, angles"` where `i` is the line number.
//! - Triples: `"i: seq, angles; seq, angles; seq, angles"` (neg, unstable, pos).
//! - Cover: prefix tokens `E` (empty), `S i`, `T i`, or `D` followed by the
//!   four children in `CoverSquare::subdivide` order.

use std::collections::BTreeMap;

use super::CoverSquare;
use crate::backend::{parse_points, rational_to_radians};
use crate::codeseq::{CodePair, CodeSequence, InitialAngles, TriplePair};
use crate::geom::{ConvexPolygon, Rectangle};
use crate::{Error, Result};

pub fn parse_initial_angles(text: &str) -> Result<InitialAngles> {
    text.trim().parse()
}

pub fn parse_polygon(text: &str) -> Result<ConvexPolygon> {
    ConvexPolygon::new(parse_points(text)?)
}

/// `"xmin xmax ymin ymax"` in rational multiples of `π/2`.
pub fn parse_rectangle(text: &str) -> Result<Rectangle> {
    let coords = text
        .split_whitespace()
        .map(rational_to_radians)
        .collect::<Result<Vec<_>>>()?;
    match coords[..] {
        [x0, x1, y0, y1] => Ok(Rectangle::new(x0, x1, y0, y1)),
        _ => Err(Error::parse("rectangle", text)),
    }
}

pub fn parse_stables(text: &str) -> Result<Vec<CodePair>> {
    indexed_lines(text)
        .map(|(i, line)| {
            let comps = fields(line, &[':']);
            let [idx, seq, angles] = comps[..] else {
                return Err(Error::Catalog(format!("stable line {i}: {line:?}")));
            };
            check_index(idx, i)?;
            code_pair(seq, angles)
        })
        .collect()
}

pub fn parse_triples(text: &str) -> Result<Vec<TriplePair>> {
    indexed_lines(text)
        .map(|(i, line)| {
            let comps = fields(line, &[':', ';']);
            let [idx, neg, neg_a, uns, uns_a, pos, pos_a] = comps[..] else {
                return Err(Error::Catalog(format!("triple line {i}: {line:?}")));
            };
            check_index(idx, i)?;
            Ok(TriplePair::new(
                code_pair(neg, neg_a)?,
                code_pair(uns, uns_a)?,
                code_pair(pos, pos_a)?,
            ))
        })
        .collect()
}

/// Leaf payload of a cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverLeaf<'a> {
    Stable(&'a CodePair),
    Triple(&'a TriplePair),
}

/// Assignment of cover squares to stable pairs and bifurcation triples.
/// Squares marked `E` appear in neither map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    pub stables: BTreeMap<CoverSquare, CodePair>,
    pub triples: BTreeMap<CoverSquare, TriplePair>,
}

impl Cover {
    /// Number of non-empty leaves.
    pub fn leaves(&self) -> usize {
        self.stables.len() + self.triples.len()
    }

    /// The leaf whose square strictly contains `(x, y)`, if any.
    pub fn square_for(&self, x: f64, y: f64) -> Option<(CoverSquare, CoverLeaf<'_>)> {
        let stable = self
            .stables
            .iter()
            .find(|(sq, _)| sq.contains(x, y))
            .map(|(sq, p)| (*sq, CoverLeaf::Stable(p)));
        stable.or_else(|| {
            self.triples
                .iter()
                .find(|(sq, _)| sq.contains(x, y))
                .map(|(sq, t)| (*sq, CoverLeaf::Triple(t)))
        })
    }
}

/// Walk the prefix grammar from `root`. All tokens must be consumed.
pub fn parse_cover(
    text: &str,
    root: CoverSquare,
    stables: &[CodePair],
    triples: &[TriplePair],
) -> Result<Cover> {
    let mut walker = CoverWalker {
        tokens: text.split_whitespace(),
        stables,
        triples,
        cover: Cover::default(),
    };
    walker.walk(root)?;
    if let Some(extra) = walker.tokens.next() {
        return Err(Error::Catalog(format!("unused cover token {extra:?}")));
    }
    tracing::debug!(
        stables = walker.cover.stables.len(),
        triples = walker.cover.triples.len(),
        "parsed cover"
    );
    Ok(walker.cover)
}

struct CoverWalker<'t, 'c> {
    tokens: std::str::SplitWhitespace<'t>,
    stables: &'c [CodePair],
    triples: &'c [TriplePair],
    cover: Cover,
}

impl<'t> CoverWalker<'t, '_> {
    fn walk(&mut self, square: CoverSquare) -> Result<()> {
        let token = self.next_token()?;
        match token {
            "E" => {}
            "S" => {
                let pair = lookup(self.stables, self.next_index()?, "stable")?;
                self.cover.stables.insert(square, pair.clone());
            }
            "T" => {
                let triple = lookup(self.triples, self.next_index()?, "triple")?;
                self.cover.triples.insert(square, triple.clone());
            }
            // recursion depth is bounded by `MAX_COVER_DEPTH` through `subdivide`
            "D" => {
                for child in square.subdivide()? {
                    self.walk(child)?;
                }
            }
            other => return Err(Error::Catalog(format!("unknown cover token {other:?}"))),
        }
        Ok(())
    }

    fn next_token(&mut self) -> Result<&'t str> {
        self.tokens
            .next()
            .ok_or_else(|| Error::Catalog("cover ended early".into()))
    }

    fn next_index(&mut self) -> Result<usize> {
        let tok = self.next_token()?;
        tok.parse()
            .map_err(|_| Error::Catalog(format!("bad cover index {tok:?}")))
    }
}

fn lookup<'a, T>(items: &'a [T], index: usize, kind: &str) -> Result<&'a T> {
    items.get(index).ok_or_else(|| {
        Error::Catalog(format!(
            "{kind} index {index} out of range ({} entries)",
            items.len()
        ))
    })
}

/// The four files of a cover catalog, parsed.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub polygon: ConvexPolygon,
    pub stables: Vec<CodePair>,
    pub triples: Vec<TriplePair>,
    pub cover: Cover,
}

impl Catalog {
    /// Parse the four file contents; the cover is rooted at `CoverSquare::initial()`.
    pub fn parse(polygon: &str, stables: &str, triples: &str, cover: &str) -> Result<Self> {
        let polygon = parse_polygon(polygon)?;
        let stables = parse_stables(stables)?;
        let triples = parse_triples(triples)?;
        let cover = parse_cover(cover, CoverSquare::initial(), &stables, &triples)?;
        Ok(Self {
            polygon,
            stables,
            triples,
            cover,
        })
    }
}

fn indexed_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
}

/// Split on `,` and on every `extra` separator, dropping empty fields.
fn fields<'a>(line: &'a str, extra: &[char]) -> Vec<&'a str> {
    line.split(|c: char| c == ',' || extra.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn check_index(field: &str, line: usize) -> Result<()> {
    let idx: usize = field
        .parse()
        .map_err(|_| Error::parse("catalog index", field))?;
    if idx != line {
        return Err(Error::Catalog(format!(
            "mismatched index {idx} on line {line}"
        )));
    }
    Ok(())
}

fn code_pair(seq: &str, angles: &str) -> Result<CodePair> {
    Ok(CodePair::new(
        seq.parse::<CodeSequence>()?,
        parse_initial_angles(angles)?,
    ))
}
