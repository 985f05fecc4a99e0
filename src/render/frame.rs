use crate::core::Viewport;
use crate::error::DashboardResult;
use crate::render::{CurvePathPrimitive, LinePrimitive, RectPrimitive, TextPrimitive, WedgePrimitive};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub curves: Vec<CurvePathPrimitive>,
    pub wedges: Vec<WedgePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            curves: Vec::new(),
            wedges: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.viewport.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for curve in &self.curves {
            curve.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// Number of primitives carrying a hover tooltip.
    #[must_use]
    pub fn tooltip_count(&self) -> usize {
        self.rects.iter().filter(|rect| rect.tooltip.is_some()).count()
            + self
                .wedges
                .iter()
                .filter(|wedge| wedge.tooltip.is_some())
                .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.curves.is_empty()
            && self.wedges.is_empty()
            && self.texts.is_empty()
    }
}
