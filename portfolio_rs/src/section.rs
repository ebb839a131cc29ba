//! Sections, scroll state and the fixed section table.
//!
//! Geometry is never trusted across layout changes: callers refresh the
//! table from a [`LayoutSource`] (the DOM in the browser, a JSON layout in
//! the CLI) before every recompute.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Section ids of the portfolio page, in document order.
pub const PAGE_SECTIONS: [&str; 6] = [
    "home",
    "skills",
    "experience",
    "work",
    "education",
    "contact",
];

/// Vertical placement of a rendered section, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Distance from the top of the document to the section start.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Exclusive lower edge of the section.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Finite, non-negative height. Anything else never matches a probe.
    pub fn is_valid(&self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.height >= 0.0
    }

    /// Half-open membership test: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        self.is_valid() && y >= self.top && y < self.bottom()
    }
}

/// A named region of the page with its current geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(flatten)]
    pub geometry: SectionGeometry,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            geometry: SectionGeometry::new(top, height),
        }
    }
}

/// Viewport scroll position and height at the time of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Vertical scroll offset (`window.scrollY`).
    pub y: f64,
    /// Viewport height (`window.innerHeight`).
    pub viewport_height: f64,
}

impl ScrollState {
    pub fn new(y: f64, viewport_height: f64) -> Self {
        Self { y, viewport_height }
    }

    /// The coordinate tested against sections: `y + viewport_height / divisor`.
    pub fn probe_point(&self, divisor: f64) -> f64 {
        self.y + self.viewport_height / divisor
    }
}

/// Anything that can report where a section currently sits.
pub trait LayoutSource {
    /// Current geometry of `id`, or `None` when it is not rendered.
    fn measure(&self, id: &str) -> Option<SectionGeometry>;
}

impl<F> LayoutSource for F
where
    F: Fn(&str) -> Option<SectionGeometry>,
{
    fn measure(&self, id: &str) -> Option<SectionGeometry> {
        self(id)
    }
}

impl LayoutSource for [Section] {
    fn measure(&self, id: &str) -> Option<SectionGeometry> {
        self.iter().find(|s| s.id == id).map(|s| s.geometry)
    }
}

impl LayoutSource for Vec<Section> {
    fn measure(&self, id: &str) -> Option<SectionGeometry> {
        self.as_slice().measure(id)
    }
}

/// Ordered `id -> geometry` table with a fixed id set.
///
/// Ids are fixed at construction; [`SectionTable::refresh`] only updates
/// geometry of ids already present. Sections the layout source cannot see
/// keep a zero-height placeholder and never match a probe.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTable {
    sections: Vec<Section>,
}

impl SectionTable {
    /// Build a table from known ids, all with empty geometry.
    pub fn new<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections: Vec<Section> = Vec::new();
        for id in ids {
            let id = id.into();
            if sections.iter().any(|s| s.id == id) {
                return Err(Error::DuplicateSection(id));
            }
            sections.push(Section::new(id, 0.0, 0.0));
        }
        Ok(Self { sections })
    }

    /// Build a table from sections that already carry geometry.
    pub fn from_sections(sections: Vec<Section>) -> Result<Self> {
        for (idx, section) in sections.iter().enumerate() {
            if sections[..idx].iter().any(|s| s.id == section.id) {
                return Err(Error::DuplicateSection(section.id.clone()));
            }
            if !section.geometry.is_valid() {
                return Err(invalid_geometry(&section.id));
            }
        }
        Ok(Self { sections })
    }

    /// The portfolio page's own sections.
    pub fn portfolio() -> Self {
        Self {
            sections: PAGE_SECTIONS
                .iter()
                .map(|id| Section::new(*id, 0.0, 0.0))
                .collect(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Id at position `idx` in page order.
    pub fn id_at(&self, idx: usize) -> Option<&str> {
        self.sections.get(idx).map(|s| s.id.as_str())
    }

    /// Overwrite the geometry of one known section.
    pub fn set_geometry(&mut self, id: &str, geometry: SectionGeometry) -> Result<()> {
        if !geometry.is_valid() {
            return Err(invalid_geometry(id));
        }
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::UnknownSection(id.to_string()))?;
        section.geometry = geometry;
        Ok(())
    }

    /// Re-measure every section. Returns how many were measurable.
    pub fn refresh<L: LayoutSource + ?Sized>(&mut self, layout: &L) -> usize {
        let mut measured = 0;
        for section in &mut self.sections {
            match layout.measure(&section.id) {
                Some(geometry) => {
                    section.geometry = geometry;
                    measured += 1;
                }
                None => section.geometry = SectionGeometry::default(),
            }
        }
        measured
    }
}

fn invalid_geometry(id: &str) -> Error {
    Error::InvalidLayout {
        id: id.to_string(),
        reason: "geometry must be finite with a non-negative height",
    }
}

impl Default for SectionTable {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl LayoutSource for SectionTable {
    fn measure(&self, id: &str) -> Option<SectionGeometry> {
        self.get(id).map(|s| s.geometry)
    }
}
