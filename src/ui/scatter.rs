use egui::{self, Align2, Color32, FontId, Stroke};

use super::color32;
use crate::app::FilmScatter;
use crate::chart::{ChartFrame, ChartVariant, ColorLegend, Pos, Tooltip, TooltipDirection};
use crate::constants::chart::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::constants::zoom::WHEEL_SENSITIVITY;
use crate::state::{ChartEvent, ChartSession, SelectionSet, ViewState};

/// Smallest container size accepted as a chart frame
const MIN_FRAME: f32 = 200.0;
const TOOLTIP_FONT: f32 = 14.0;
const TOOLTIP_PADDING: f32 = 8.0;
const TICK_LENGTH: f32 = 6.0;

/// Colours taken from the active egui theme
struct Ink {
    text: Color32,
    axis: Color32,
    grid: Color32,
}

impl Ink {
    fn new(visuals: &egui::Visuals) -> Self {
        Self {
            text: visuals.text_color(),
            axis: visuals.strong_text_color(),
            grid: visuals.widgets.noninteractive.bg_stroke.color,
        }
    }
}

/// Frame to capture when a chart is first shown
fn initial_frame(available: egui::Vec2) -> ChartFrame {
    if available.x >= MIN_FRAME && available.y >= MIN_FRAME {
        ChartFrame::new(available.x as f64, available.y as f64)
    } else {
        ChartFrame::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

fn to_screen(origin: egui::Pos2, p: Pos) -> egui::Pos2 {
    egui::pos2(origin.x + p.x as f32, origin.y + p.y as f32)
}

fn to_frame(origin: egui::Pos2, p: egui::Pos2) -> Pos {
    Pos::new((p.x - origin.x) as f64, (p.y - origin.y) as f64)
}

/// Render the scatterplot for `variant`, setting its session up on first use
pub fn render_chart(app: &mut FilmScatter, ui: &mut egui::Ui, variant: ChartVariant) {
    profiling::scope!("render_chart");

    let view = app.state.view.clone();
    let frame = initial_frame(ui.available_size());
    let Some(session) = app.state.session_or_setup(variant, frame) else {
        return;
    };

    let frame = *session.frame();
    let size = egui::vec2(frame.width as f32, frame.height as f32);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let origin = rect.min;

    let legend = view.show_legend.then(|| session.color_legend());
    handle_input(ui, &response, origin, session, legend.as_ref());

    let painter = ui.painter_at(rect);
    let ink = Ink::new(ui.visuals());

    paint_axes(&painter, origin, session, &view, &ink);
    paint_points(&painter, origin, session);

    if let Some(legend) = &legend {
        paint_color_legend(&painter, origin, legend, session.selection(), &ink);
    }
    if view.show_size_legend {
        paint_size_legend(&painter, origin, session, &ink);
    }

    if let Some(tooltip) = session.tooltip() {
        if variant.fancy_tooltip() {
            paint_tooltip(&painter, origin, rect, &tooltip);
        } else {
            let text = tooltip.content.lines().collect::<Vec<_>>().join("\n");
            response.on_hover_text_at_pointer(text);
        }
    }
}

/// Pointer state for one frame, in frame coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PointerInput {
    pos: Option<Pos>,
    clicked: bool,
    double_clicked: bool,
    drag_dx: f32,
    scroll: f32,
}

impl PointerInput {
    fn read(ui: &egui::Ui, response: &egui::Response, origin: egui::Pos2) -> Self {
        Self {
            pos: response.hover_pos().map(|p| to_frame(origin, p)),
            clicked: response.clicked(),
            double_clicked: response.double_clicked(),
            drag_dx: if response.dragged() { response.drag_delta().x } else { 0.0 },
            scroll: ui.input(|i| i.smooth_scroll_delta.y),
        }
    }
}

/// Events for one frame of pointer input
///
/// `legend` is `None` while the legend is hidden; pinned buckets are then
/// toggled off since no swatch is left to unpin them. Zoom and hover only
/// react inside the plot's x range.
fn chart_events(
    input: &PointerInput,
    (x0, x1): (f64, f64),
    legend: Option<&ColorLegend>,
    pinned: &SelectionSet,
) -> Vec<ChartEvent> {
    let mut events = Vec::new();
    if legend.is_none() {
        events.extend(pinned.iter().map(ChartEvent::ToggleBucket));
    }

    let swatch = input.pos.and_then(|p| legend.and_then(|l| l.swatch_at(p)));
    let in_plot = input.pos.filter(|p| p.x >= x0 && p.x <= x1);

    if input.clicked {
        if let Some(bucket) = swatch {
            events.push(ChartEvent::ToggleBucket(bucket));
        }
    }
    if input.double_clicked && swatch.is_none() {
        events.push(ChartEvent::ResetView);
    }
    if input.drag_dx != 0.0 {
        events.push(ChartEvent::Pan {
            dx: input.drag_dx as f64,
        });
    }
    if let Some(pos) = in_plot {
        if input.scroll != 0.0 {
            events.push(ChartEvent::ZoomAt {
                anchor_x: pos.x,
                factor: 2f64.powf(input.scroll as f64 * WHEEL_SENSITIVITY),
            });
        }
    }

    events.push(match in_plot {
        Some(pos) => ChartEvent::Hover(pos),
        None => ChartEvent::Leave,
    });
    events
}

fn handle_input(
    ui: &egui::Ui,
    response: &egui::Response,
    origin: egui::Pos2,
    session: &mut ChartSession,
    legend: Option<&ColorLegend>,
) {
    let input = PointerInput::read(ui, response, origin);
    if input.pos.and_then(|p| legend.and_then(|l| l.swatch_at(p))).is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let x_range = session.frame().x_range(&session.variant().margins());
    for event in chart_events(&input, x_range, legend, session.selection()) {
        session.dispatch(event);
    }
}

fn paint_axes(
    painter: &egui::Painter,
    origin: egui::Pos2,
    session: &ChartSession,
    view: &ViewState,
    ink: &Ink,
) {
    profiling::scope!("paint_axes");

    let variant = session.variant();
    let frame = session.frame();
    let margins = variant.margins();
    let (x0, x1) = frame.x_range(&margins);
    let axis_y = frame.x_axis_y(&margins);
    let grid_offset = variant.y_grid_offset();
    let axes = session.axes();
    let font = FontId::proportional(11.0);

    let axis_stroke = Stroke::new(1.0, ink.axis);
    let grid_stroke = Stroke::new(1.0, ink.grid);
    let at = |x: f64, y: f64| to_screen(origin, Pos::new(x, y));

    painter.line_segment([at(x0, axis_y), at(x1, axis_y)], axis_stroke);
    painter.line_segment([at(x0, margins.top), at(x0, axis_y)], axis_stroke);

    for tick in axes
        .x_ticks
        .iter()
        .filter(|t| t.position >= x0 - 0.5 && t.position <= x1 + 0.5)
    {
        let base = at(tick.position, axis_y);
        if view.show_grid {
            painter.line_segment([base, at(tick.position, margins.top + grid_offset)], grid_stroke);
        }
        painter.line_segment([base, base + egui::vec2(0.0, TICK_LENGTH)], axis_stroke);
        painter.text(
            base + egui::vec2(0.0, TICK_LENGTH + 3.0),
            Align2::CENTER_TOP,
            &tick.label,
            font.clone(),
            ink.text,
        );
    }

    for tick in &axes.y_ticks {
        let row = at(x0, tick.position);
        if view.show_grid {
            painter.line_segment(
                [at(x0, tick.position + grid_offset), at(x1, tick.position + grid_offset)],
                grid_stroke,
            );
        }
        painter.line_segment([row - egui::vec2(TICK_LENGTH, 0.0), row], axis_stroke);
        painter.text(
            row - egui::vec2(TICK_LENGTH + 3.0, 0.0),
            Align2::RIGHT_CENTER,
            &tick.label,
            font.clone(),
            ink.text,
        );
    }

    let label_font = FontId::proportional(14.0);
    painter.text(
        at(frame.width / 2.0, frame.height - margins.top),
        Align2::CENTER_CENTER,
        "Revenue (Millions)",
        label_font.clone(),
        ink.text,
    );

    // rotated a quarter turn counter-clockwise, centred on the anchor
    let galley = painter.layout_no_wrap("Genre".to_string(), label_font, ink.text);
    let anchor = at(margins.left / 3.0, frame.height / 2.0);
    let pos = anchor + egui::vec2(-galley.size().y / 2.0, galley.size().x / 2.0);
    painter.add(
        egui::epaint::TextShape::new(pos, galley, ink.text)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );
}

fn paint_points(painter: &egui::Painter, origin: egui::Pos2, session: &ChartSession) {
    profiling::scope!("paint_points");

    let margins = session.variant().margins();
    let (x0, x1) = session.frame().x_range(&margins);
    let clip = egui::Rect::from_x_y_ranges(
        origin.x + x0 as f32..=origin.x + x1 as f32,
        painter.clip_rect().y_range(),
    );
    let painter = painter.with_clip_rect(clip.intersect(painter.clip_rect()));
    let stroke = session.variant().point_stroke();

    for point in session.point_visuals().filter(|p| p.is_placed()) {
        let opacity = point.visibility.opacity();
        if opacity <= 0.0 {
            continue;
        }
        let center = to_screen(origin, Pos::new(point.cx, point.cy));
        let fill = color32(point.fill).gamma_multiply(opacity);
        let stroke = stroke
            .map(|c| Stroke::new(1.0, color32(c).gamma_multiply(opacity)))
            .unwrap_or(Stroke::NONE);
        painter.circle(center, point.radius as f32, fill, stroke);
    }
}

fn paint_color_legend(
    painter: &egui::Painter,
    origin: egui::Pos2,
    legend: &ColorLegend,
    selection: &SelectionSet,
    ink: &Ink,
) {
    painter.text(
        to_screen(origin, legend.origin),
        Align2::LEFT_TOP,
        legend.title,
        FontId::proportional(13.0),
        ink.text,
    );

    for swatch in &legend.swatches {
        let rect = egui::Rect::from_min_max(
            to_screen(origin, swatch.rect.min),
            to_screen(origin, swatch.rect.max),
        );
        let dimmed = !selection.is_empty() && !selection.contains(swatch.bucket);
        let color = color32(swatch.color);
        painter.rect_filled(rect, 0.0, if dimmed { color.gamma_multiply(0.3) } else { color });
        painter.text(
            to_screen(origin, swatch.label_pos),
            Align2::LEFT_CENTER,
            &swatch.label,
            FontId::proportional(11.0),
            ink.text,
        );
    }
}

fn paint_size_legend(painter: &egui::Painter, origin: egui::Pos2, session: &ChartSession, ink: &Ink) {
    let legend = session.size_legend();
    painter.text(
        to_screen(origin, legend.origin),
        Align2::LEFT_TOP,
        legend.title,
        FontId::proportional(13.0),
        ink.text,
    );
    for cell in legend.cells.iter().filter(|c| c.radius.is_finite()) {
        painter.circle_stroke(
            to_screen(origin, cell.center),
            cell.radius as f32,
            Stroke::new(1.0, ink.axis),
        );
        painter.text(
            to_screen(origin, cell.label_pos),
            Align2::LEFT_CENTER,
            &cell.label,
            FontId::proportional(11.0),
            ink.text,
        );
    }
}

/// Coloured box centred on the anchor, extending up (Bottom) or down (Top)
fn paint_tooltip(painter: &egui::Painter, origin: egui::Pos2, bounds: egui::Rect, tooltip: &Tooltip) {
    let font = FontId::proportional(TOOLTIP_FONT);
    let galleys: Vec<_> = tooltip
        .content
        .lines()
        .map(|line| painter.layout_no_wrap(line, font.clone(), Color32::WHITE))
        .collect();

    let width = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max) + 2.0 * TOOLTIP_PADDING;
    let height = galleys.iter().map(|g| g.size().y).sum::<f32>() + 2.0 * TOOLTIP_PADDING;
    let anchor = to_screen(origin, tooltip.anchor);
    let top = match tooltip.direction {
        TooltipDirection::Bottom => anchor.y - height,
        TooltipDirection::Top => anchor.y,
    };

    let mut rect = egui::Rect::from_min_size(
        egui::pos2(anchor.x - width / 2.0, top),
        egui::vec2(width, height),
    );
    // keep the box inside the chart
    rect = rect.translate(egui::vec2(
        (bounds.left() - rect.left()).max(0.0) - (rect.right() - bounds.right()).max(0.0),
        (bounds.top() - rect.top()).max(0.0) - (rect.bottom() - bounds.bottom()).max(0.0),
    ));

    painter.rect_filled(rect, egui::CornerRadius::same(4), color32(tooltip.fill));

    let mut y = rect.top() + TOOLTIP_PADDING;
    for galley in galleys {
        let h = galley.size().y;
        painter.galley(egui::pos2(rect.left() + TOOLTIP_PADDING, y), galley, Color32::WHITE);
        y += h;
    }
}
