use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::DotPlotEngine;

const AXIS_COLOR: Color = Color::from_hex(0x333333);
const DOT_COLOR: Color = Color::from_hex(0x000000);
const TOOL_COLOR: Color = Color::from_hex(0xff0000);
const RANGE_COLOR: Color = Color::from_hex(0x0000ff);
const RANGE_FILL_ALPHA: f64 = 0.2;
const GUIDE_ALPHA: f64 = 0.5;

const AXIS_STROKE_PX: f64 = 1.0;
const TOOL_STROKE_PX: f64 = 2.0;
const TICK_LENGTH_PX: f64 = 6.0;
const LABEL_FONT_PX: f64 = 12.0;
const LABEL_GAP_PX: f64 = 4.0;

impl<R: Renderer> DotPlotEngine<R> {
    /// Materializes the current chart state as draw primitives.
    ///
    /// Pixel positions from the tools are plot-relative; the frame shifts them
    /// by the left margin. Dots sit on the axis baseline and stack upwards one
    /// `level_gap` per level.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let config = self.config();
        let geometry = self.geometry();
        let scale = geometry.scale;
        let height = self.chart_height();
        let left = config.margins.left;
        let top = config.margins.top;
        let baseline = height - config.margins.bottom;
        let plot_x = |px: f64| left + px;

        let mut frame = RenderFrame::new(config.width, height).with_line(LinePrimitive::new(
            left,
            baseline,
            left + geometry.inner_width,
            baseline,
            AXIS_STROKE_PX,
            AXIS_COLOR,
        ));

        for tick in self.ticks() {
            let x = plot_x(scale.forward(tick));
            frame = frame
                .with_line(LinePrimitive::vertical(
                    x,
                    baseline,
                    baseline + TICK_LENGTH_PX,
                    AXIS_STROKE_PX,
                    AXIS_COLOR,
                ))
                .with_text(TextPrimitive::new(
                    format_axis_value(tick),
                    x,
                    baseline + TICK_LENGTH_PX + LABEL_FONT_PX,
                    LABEL_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
        }

        if config.tools.dots {
            let radius = config.dot_radius;
            for point in self.scatter() {
                let cy = baseline - radius - 2.0 - (point.level - 1) as f64 * geometry.level_gap;
                frame = frame.with_circle(CirclePrimitive::new(
                    plot_x(scale.forward(point.value)),
                    cy,
                    radius,
                    DOT_COLOR,
                ));
            }
        }

        if config.tools.intervals {
            for bin in self.interval_bins() {
                let start = scale.forward(bin.value_min);
                let end = scale.forward(bin.value_max);
                if start > geometry.inner_width {
                    continue;
                }
                frame = frame.with_line(LinePrimitive::vertical(
                    plot_x(start),
                    top,
                    baseline,
                    AXIS_STROKE_PX,
                    AXIS_COLOR.with_alpha(GUIDE_ALPHA),
                ));
                let mid = (start + end.min(geometry.inner_width)) / 2.0;
                frame = frame.with_text(TextPrimitive::new(
                    bin.count.to_string(),
                    plot_x(mid),
                    top + LABEL_FONT_PX,
                    LABEL_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
        }

        if config.tools.range_tool {
            let range = self.range();
            frame = frame
                .with_rect(RectPrimitive::new(
                    plot_x(range.low()),
                    top,
                    range.high() - range.low(),
                    (baseline - top).max(0.0),
                    RANGE_COLOR.with_alpha(RANGE_FILL_ALPHA),
                ))
                .with_line(LinePrimitive::vertical(
                    plot_x(range.low()),
                    top,
                    baseline,
                    TOOL_STROKE_PX,
                    RANGE_COLOR,
                ))
                .with_line(LinePrimitive::vertical(
                    plot_x(range.high()),
                    top,
                    baseline,
                    TOOL_STROKE_PX,
                    RANGE_COLOR,
                ))
                .with_text(TextPrimitive::new(
                    format!("count: {}", self.range_count()),
                    plot_x(range.center()),
                    top - LABEL_GAP_PX,
                    LABEL_FONT_PX,
                    RANGE_COLOR,
                    TextHAlign::Center,
                ));
        }

        if config.tools.value_tool {
            let x = plot_x(self.threshold().position());
            let split = self.threshold_split();
            frame = frame
                .with_line(LinePrimitive::vertical(
                    x,
                    top,
                    baseline,
                    TOOL_STROKE_PX,
                    TOOL_COLOR,
                ))
                .with_text(TextPrimitive::new(
                    format!("{:.1}", self.threshold_value()),
                    x,
                    top - LABEL_GAP_PX,
                    LABEL_FONT_PX,
                    TOOL_COLOR,
                    TextHAlign::Center,
                ))
                .with_text(TextPrimitive::new(
                    split.at_or_below.to_string(),
                    x - LABEL_GAP_PX,
                    top + LABEL_FONT_PX,
                    LABEL_FONT_PX,
                    TOOL_COLOR,
                    TextHAlign::Right,
                ))
                .with_text(TextPrimitive::new(
                    split.above.to_string(),
                    x + LABEL_GAP_PX,
                    top + LABEL_FONT_PX,
                    LABEL_FONT_PX,
                    TOOL_COLOR,
                    TextHAlign::Left,
                ));
        }

        if config.tools.threshold_lines {
            for line in self.threshold_lines().lines() {
                let color = if line.draggable {
                    TOOL_COLOR
                } else {
                    AXIS_COLOR.with_alpha(GUIDE_ALPHA)
                };
                frame = frame.with_line(LinePrimitive::vertical(
                    plot_x(line.x),
                    top,
                    baseline,
                    TOOL_STROKE_PX,
                    color,
                ));
            }
            if !self.threshold_lines().is_empty() {
                for gap in self.gap_counts() {
                    frame = frame.with_text(TextPrimitive::new(
                        gap.count.to_string(),
                        plot_x(gap.mid_px()),
                        top - LABEL_GAP_PX,
                        LABEL_FONT_PX,
                        TOOL_COLOR,
                        TextHAlign::Center,
                    ));
                }
            }
        }

        for separator in self.group_separators() {
            frame = frame.with_line(LinePrimitive::vertical(
                plot_x(scale.forward(separator)),
                top,
                baseline,
                AXIS_STROKE_PX,
                AXIS_COLOR.with_alpha(GUIDE_ALPHA),
            ));
        }

        frame
    }
}

/// Whole numbers print without decimals, everything else with one.
fn format_axis_value(value: f64) -> String {
    if (value - value.round()).abs() <= 1e-9 {
        format!("{:.0}", value.round())
    } else {
        format!("{value:.1}")
    }
}
