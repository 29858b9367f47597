use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames into a standalone SVG document kept in memory.
#[derive(Debug)]
pub struct SvgRenderer {
    document: String,
    background: Color,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            document: String::new(),
            background: Color::rgb(1.0, 1.0, 1.0),
            last_stats: SvgRenderStats::default(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG markup of the last rendered frame, empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn set_background(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    fn write_frame(&self, frame: &RenderFrame) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = frame.width,
            h = frame.height
        )?;
        writeln!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}" {}/>"#,
            frame.width,
            frame.height,
            fill_attrs(self.background)
        )?;

        for rect in &frame.rects {
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                fill_attrs(rect.fill_color)
            )?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.color.to_hex_string(),
                line.color.alpha,
                line.stroke_width
            )?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                fill_attrs(circle.fill_color)
            )?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" {}>{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                fill_attrs(text.color),
                escape_xml(&text.text)
            )?;
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>\n");
        Ok((out, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = self
            .write_frame(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn fill_attrs(color: Color) -> String {
    format!(
        r#"fill="{}" fill-opacity="{}""#,
        color.to_hex_string(),
        color.alpha
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
