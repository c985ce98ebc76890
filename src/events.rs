use crate::geom::Point;

#[derive(Debug, Clone)]
pub enum WidgetEvent {
    Show,
    Hide,
    PointerMove(Point),
    PointerLeave,
}
