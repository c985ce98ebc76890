//! The widget controller: buckets buttons into rows at construction and
//! answers show/hide stagger schedules and pointer tilt. It owns no display
//! resources; the embedding layer applies the class names, margins, delays
//! and tilt angles it hands out.

use crate::config::{Options, StaggerDirection};
use crate::events::WidgetEvent;
use crate::geom::{Point, Tilt, Viewport};
use crate::layout::{self, Position};
use crate::rows::RowTree;
use derive_more::{AsRef, Deref, Display, From, Into};
use std::time::Duration;

/// A CSS-style class name handed to the embedding layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct ClassName(String);

/// What a row slot holds: the main button or the child with the given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRef {
    Main,
    Child(usize),
}

#[derive(Debug, Clone)]
pub struct ChildButton {
    label: String,
    position: Position,
    variant: u32,
}

impl ChildButton {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn variant(&self) -> u32 {
        self.variant
    }

    /// Classes for this button: base, child marker and cosmetic variant.
    pub fn class_names(&self) -> Vec<ClassName> {
        vec![
            ClassName::from("buttonfly__button".to_string()),
            ClassName::from("buttonfly__button--child".to_string()),
            ClassName::from(format!("buttonfly__button--variant{}", self.variant)),
        ]
    }
}

/// Classes for a row container.
pub fn row_class_names(number: i32) -> Vec<ClassName> {
    vec![
        ClassName::from("buttonfly__row".to_string()),
        ClassName::from(format!("buttonfly__row--n{}", number)),
    ]
}

/// Classes for the main button.
pub fn main_button_class_names() -> Vec<ClassName> {
    vec![
        ClassName::from("buttonfly__button".to_string()),
        ClassName::from("buttonfly__button--main".to_string()),
    ]
}

/// One entry of a stagger schedule: when child `index` starts its transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDelay {
    pub index: usize,
    pub delay: Duration,
}

/// What the embedding layer should apply after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameUpdate {
    Stagger(Vec<ButtonDelay>),
    Tilt(Tilt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

pub struct ButtonFly {
    options: Options,
    viewport: Viewport,
    rows: RowTree<ButtonRef>,
    children: Vec<ChildButton>,
    visibility: Visibility,
    tilt: Tilt,
}

impl ButtonFly {
    /// Builds the row tree for the given child buttons, in list order.
    ///
    /// The main button takes slot 0 of the middle row; child `i` goes to
    /// whatever row the layout assigns to index `i`. The caller's ordering
    /// is the layout ordering, nothing is sorted here.
    pub fn new(labels: Vec<String>, viewport: Viewport, options: Options) -> Self {
        let mut rows = RowTree::new();
        let middle = rows.get_or_create(0);
        rows.append(middle, ButtonRef::Main);

        let children: Vec<ChildButton> = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                let position = layout::resolve_position(index);
                let variant = layout::variant_for_button(index, options.variant_count);
                let row = rows.get_or_create(position.row);
                rows.append(row, ButtonRef::Child(index));
                ChildButton {
                    label,
                    position,
                    variant,
                }
            })
            .collect();

        log::debug!(
            "laid out {} child buttons across {} rows",
            children.len(),
            rows.len()
        );

        Self {
            options,
            viewport,
            rows,
            children,
            visibility: Visibility::default(),
            tilt: Tilt::default(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn rows(&self) -> &RowTree<ButtonRef> {
        &self.rows
    }

    pub fn children(&self) -> &[ChildButton] {
        &self.children
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    /// Left margin for a row, growing with its distance from the middle.
    pub fn row_margin(&self, number: i32) -> f64 {
        self.options.row_left_margin_step * f64::from(number.abs())
    }

    pub fn refresh(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.tilt = Tilt::default();
    }

    pub fn show(&mut self) -> Vec<ButtonDelay> {
        self.visibility = Visibility::Shown;
        self.stagger(self.options.show_stagger)
    }

    pub fn hide(&mut self) -> Vec<ButtonDelay> {
        self.visibility = Visibility::Hidden;
        self.stagger(self.options.hide_stagger)
    }

    /// Per-child transition delays for one stagger pass.
    ///
    /// `Outward` uses the raw delay ranking (center first); `Inward`
    /// subtracts each rank from the maximum across all children, so the
    /// outermost buttons move first and the center finishes the pass.
    fn stagger(&self, direction: StaggerDirection) -> Vec<ButtonDelay> {
        let step = Duration::from_millis(self.options.time_per_delay_unit_ms);
        let max_units = (0..self.children.len())
            .map(layout::delay_units_for_button)
            .max()
            .unwrap_or(0);

        (0..self.children.len())
            .map(|index| {
                let units = layout::delay_units_for_button(index);
                let units = match direction {
                    StaggerDirection::Outward => units,
                    StaggerDirection::Inward => max_units - units,
                };
                ButtonDelay {
                    index,
                    delay: step * units,
                }
            })
            .collect()
    }

    /// Tilt for a pointer position inside the viewport. O(1), independent of
    /// the number of buttons; this runs once per pointer-move event.
    ///
    /// Each axis is clamped to the configured maximum on its own, so a
    /// pointer far outside one edge cannot leak rotation into the other
    /// axis.
    pub fn pointer_tilt(&self, pointer: Point) -> Tilt {
        let max = self.options.tilt_max_deg;
        let center = self.viewport.center();

        let nx = normalized_offset(pointer.x, center.x, self.viewport.width);
        let ny = normalized_offset(pointer.y, center.y, self.viewport.height);

        Tilt {
            rot_x_deg: (-ny * max).clamp(-max, max),
            rot_y_deg: (nx * max).clamp(-max, max),
        }
    }

    /// Applies one event and returns what the embedding layer should do.
    pub fn handle(&mut self, event: WidgetEvent) -> FrameUpdate {
        match event {
            WidgetEvent::Show => FrameUpdate::Stagger(self.show()),
            WidgetEvent::Hide => FrameUpdate::Stagger(self.hide()),
            WidgetEvent::PointerMove(pointer) => {
                self.tilt = self.pointer_tilt(pointer);
                FrameUpdate::Tilt(self.tilt)
            }
            WidgetEvent::PointerLeave => {
                self.tilt = Tilt::default();
                FrameUpdate::Tilt(self.tilt)
            }
        }
    }
}

fn normalized_offset(value: f64, center: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        (value - center) / (extent / 2.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(count: usize) -> ButtonFly {
        let labels = (0..count).map(|i| format!("button {i}")).collect();
        ButtonFly::new(labels, Viewport::new(800.0, 600.0), Options::default())
    }

    fn delays_ms(schedule: &[ButtonDelay]) -> Vec<u128> {
        schedule.iter().map(|d| d.delay.as_millis()).collect()
    }

    #[test]
    fn construction_buckets_buttons_into_rows() {
        let w = widget(10);
        let numbers: Vec<i32> = w.rows().iter_top_down().map(|r| r.number()).collect();
        assert_eq!(numbers, vec![2, 1, 0, -1, -2]);

        let middle = w.rows().get(0).unwrap();
        // Main button first, then children 2, 5 in list order.
        assert_eq!(
            w.rows().row(middle).children(),
            &[ButtonRef::Main, ButtonRef::Child(2), ButtonRef::Child(5)]
        );

        let top = w.rows().get(1).unwrap();
        assert_eq!(
            w.rows().row(top).children(),
            &[ButtonRef::Child(0), ButtonRef::Child(3), ButtonRef::Child(6)]
        );
    }

    #[test]
    fn show_staggers_outward() {
        let mut w = widget(9);
        let schedule = w.show();
        assert_eq!(w.visibility(), Visibility::Shown);
        // delay units for indices 0..9: 0 0 1 1 1 2 2 2 1
        assert_eq!(
            delays_ms(&schedule),
            vec![0, 0, 100, 100, 100, 200, 200, 200, 100]
        );
    }

    #[test]
    fn hide_inverts_the_ranking() {
        let mut w = widget(9);
        let schedule = w.hide();
        assert_eq!(w.visibility(), Visibility::Hidden);
        // max units is 2, so each delay is (2 - units) * 100ms.
        assert_eq!(
            delays_ms(&schedule),
            vec![200, 200, 100, 100, 100, 0, 0, 0, 100]
        );
    }

    #[test]
    fn empty_widget_has_empty_schedules() {
        let mut w = widget(0);
        assert!(w.show().is_empty());
        assert!(w.hide().is_empty());
        // The middle row still exists for the main button.
        assert_eq!(w.rows().len(), 1);
    }

    #[test]
    fn row_margin_grows_with_distance() {
        let w = widget(20);
        assert_eq!(w.row_margin(0), 0.0);
        assert_eq!(w.row_margin(2), 48.0);
        assert_eq!(w.row_margin(-2), 48.0);
    }

    fn text(class: &ClassName) -> &str {
        class
    }

    #[test]
    fn class_names_cycle_variants() {
        let w = widget(4);
        let classes = w.children()[0].class_names();
        assert_eq!(text(&classes[0]), "buttonfly__button");
        assert_eq!(text(&classes[1]), "buttonfly__button--child");
        assert_eq!(text(&classes[2]), "buttonfly__button--variant3");

        assert_eq!(text(&row_class_names(-2)[1]), "buttonfly__row--n-2");
        assert_eq!(
            text(&main_button_class_names()[1]),
            "buttonfly__button--main"
        );
    }

    #[test]
    fn pointer_tilt_is_neutral_at_center() {
        let w = widget(5);
        assert_eq!(w.pointer_tilt(Point::new(400.0, 300.0)), Tilt::default());
    }

    #[test]
    fn pointer_tilt_clamps_each_axis_independently() {
        let w = widget(5);
        // Far beyond the right edge, vertically centered: only the Y axis
        // rotation saturates, the X axis stays flat.
        let tilt = w.pointer_tilt(Point::new(4000.0, 300.0));
        assert_eq!(tilt.rot_y_deg, 15.0);
        assert_eq!(tilt.rot_x_deg, 0.0);

        // Both far out: both saturate, neither exceeds the clamp.
        let tilt = w.pointer_tilt(Point::new(-4000.0, 6000.0));
        assert_eq!(tilt.rot_y_deg, -15.0);
        assert_eq!(tilt.rot_x_deg, -15.0);
    }

    #[test]
    fn pointer_leave_resets_tilt() {
        let mut w = widget(5);
        let update = w.handle(WidgetEvent::PointerMove(Point::new(700.0, 100.0)));
        assert!(matches!(update, FrameUpdate::Tilt(t) if t != Tilt::default()));
        assert_ne!(w.tilt(), Tilt::default());

        let update = w.handle(WidgetEvent::PointerLeave);
        assert_eq!(update, FrameUpdate::Tilt(Tilt::default()));
        assert_eq!(w.tilt(), Tilt::default());
    }

    #[test]
    fn degenerate_viewport_stays_flat() {
        let labels = vec!["a".to_string()];
        let w = ButtonFly::new(labels, Viewport::new(0.0, 0.0), Options::default());
        assert_eq!(w.pointer_tilt(Point::new(123.0, 456.0)), Tilt::default());
    }
}
