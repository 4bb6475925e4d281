//! Pointer gesture math for title-bar drags and edge/corner resizes.
//!
//! Both computations are anchored to values captured when the gesture began, so repeated move
//! events never accumulate error.

use crate::config::ShellConfig;
use crate::model::{
    DragSession, PointerPosition, ResizeEdge, ResizeSession, Viewport, WindowId, WindowRect,
};

pub fn begin_drag(window_id: WindowId, rect: WindowRect, pointer: PointerPosition) -> DragSession {
    DragSession {
        window_id,
        offset_x: pointer.x - rect.x,
        offset_y: pointer.y - rect.y,
    }
}

pub fn begin_resize(
    window_id: WindowId,
    edge: ResizeEdge,
    rect: WindowRect,
    pointer: PointerPosition,
) -> ResizeSession {
    ResizeSession {
        window_id,
        edge,
        pointer_start: pointer,
        rect_start: rect,
    }
}

/// Window origin for a pointer position during a drag.
///
/// `y` is kept between the top of the viewport and the point where the title bar would slide
/// under the taskbar. `x` is unconstrained.
pub fn drag_position(
    session: &DragSession,
    pointer: PointerPosition,
    viewport: Viewport,
    config: &ShellConfig,
) -> (f64, f64) {
    let x = pointer.x - session.offset_x;
    let max_y =
        (viewport.height - config.taskbar_height - config.titlebar_drag_allowance).max(0.0);
    let y = (pointer.y - session.offset_y).clamp(0.0, max_y);
    (x, y)
}

/// Rectangle produced by dragging `edge` by the total displacement `(dx, dy)` from `initial`.
///
/// Dimensions never drop below the minimums. West and north edges move the origin so the
/// opposite edge stays where it was at gesture start.
pub fn resize_rect(
    initial: WindowRect,
    edge: ResizeEdge,
    dx: f64,
    dy: f64,
    min_w: f64,
    min_h: f64,
) -> WindowRect {
    let mut next = initial;

    if edge.includes_east() {
        next.w = (initial.w + dx).max(min_w);
    }
    if edge.includes_west() {
        next.w = (initial.w - dx).max(min_w);
        next.x = initial.right() - next.w;
    }
    if edge.includes_south() {
        next.h = (initial.h + dy).max(min_h);
    }
    if edge.includes_north() {
        next.h = (initial.h - dy).max(min_h);
        next.y = initial.bottom() - next.h;
    }

    next
}

/// Applies [`resize_rect`] using the displacement between the session start and `pointer`.
pub fn session_resize_rect(
    session: &ResizeSession,
    pointer: PointerPosition,
    config: &ShellConfig,
) -> WindowRect {
    resize_rect(
        session.rect_start,
        session.edge,
        pointer.x - session.pointer_start.x,
        pointer.y - session.pointer_start.y,
        config.min_window_width,
        config.min_window_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const MIN_W: f64 = 400.0;
    const MIN_H: f64 = 300.0;

    fn initial() -> WindowRect {
        WindowRect::new(100.0, 100.0, 600.0, 500.0)
    }

    fn edge_strategy() -> impl Strategy<Value = ResizeEdge> {
        prop::sample::select(ResizeEdge::ALL.to_vec())
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let session = begin_drag(
            WindowId(1),
            WindowRect::new(50.0, 60.0, 400.0, 300.0),
            PointerPosition::new(70.0, 75.0),
        );
        let (x, y) = drag_position(
            &session,
            PointerPosition::new(170.0, 175.0),
            Viewport::new(1280.0, 720.0),
            &ShellConfig::default(),
        );
        assert_eq!((x, y), (150.0, 160.0));
    }

    #[test]
    fn drag_clamps_vertically_but_not_horizontally() {
        let session = DragSession {
            window_id: WindowId(1),
            offset_x: 10.0,
            offset_y: 10.0,
        };
        let viewport = Viewport::new(1280.0, 720.0);
        let config = ShellConfig::default();

        assert_eq!(
            drag_position(&session, PointerPosition::new(-200.0, -50.0), viewport, &config),
            (-210.0, 0.0)
        );
        assert_eq!(
            drag_position(&session, PointerPosition::new(5000.0, 5000.0), viewport, &config),
            (4990.0, 720.0 - 48.0 - 32.0)
        );
    }

    #[test]
    fn drag_allowance_is_configurable() {
        let session = DragSession {
            window_id: WindowId(1),
            offset_x: 0.0,
            offset_y: 0.0,
        };
        let config = ShellConfig {
            titlebar_drag_allowance: 0.0,
            ..ShellConfig::default()
        };
        let (_, y) = drag_position(
            &session,
            PointerPosition::new(0.0, 2000.0),
            Viewport::new(800.0, 600.0),
            &config,
        );
        assert_eq!(y, 552.0);
    }

    #[test]
    fn east_and_south_grow_from_the_origin() {
        let rect = resize_rect(initial(), ResizeEdge::SouthEast, 40.0, 25.0, MIN_W, MIN_H);
        assert_eq!(rect, WindowRect::new(100.0, 100.0, 640.0, 525.0));
    }

    #[test]
    fn west_shift_keeps_right_edge() {
        let rect = resize_rect(initial(), ResizeEdge::West, -50.0, 999.0, MIN_W, MIN_H);
        assert_eq!(rect, WindowRect::new(50.0, 100.0, 650.0, 500.0));
    }

    #[test]
    fn north_clamp_pins_origin_at_bottom_minus_minimum() {
        let rect = resize_rect(initial(), ResizeEdge::North, 0.0, 800.0, MIN_W, MIN_H);
        assert_eq!(rect, WindowRect::new(100.0, 300.0, 600.0, 300.0));
    }

    #[test]
    fn pure_edges_leave_the_other_axis_alone() {
        let rect = resize_rect(initial(), ResizeEdge::East, 10.0, 300.0, MIN_W, MIN_H);
        assert_eq!(rect, WindowRect::new(100.0, 100.0, 610.0, 500.0));
        let rect = resize_rect(initial(), ResizeEdge::South, 300.0, 10.0, MIN_W, MIN_H);
        assert_eq!(rect, WindowRect::new(100.0, 100.0, 600.0, 510.0));
    }

    #[test]
    fn session_resize_uses_total_displacement() {
        let session = begin_resize(
            WindowId(4),
            ResizeEdge::NorthWest,
            initial(),
            PointerPosition::new(100.0, 100.0),
        );
        let config = ShellConfig::default();
        let _ = session_resize_rect(&session, PointerPosition::new(10.0, 10.0), &config);
        let rect = session_resize_rect(&session, PointerPosition::new(80.0, 90.0), &config);
        assert_eq!(rect, WindowRect::new(80.0, 90.0, 620.0, 510.0));
    }

    proptest! {
        #[test]
        fn resize_never_goes_below_minimum(
            edge in edge_strategy(),
            dx in -1.0e6f64..1.0e6,
            dy in -1.0e6f64..1.0e6,
        ) {
            let rect = resize_rect(initial(), edge, dx, dy, MIN_W, MIN_H);
            prop_assert!(rect.w >= MIN_W);
            prop_assert!(rect.h >= MIN_H);
        }

        #[test]
        fn west_and_north_keep_opposite_edges_fixed(
            edge in edge_strategy(),
            moves in prop::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 1..12),
        ) {
            let start = initial();
            let session = begin_resize(WindowId(1), edge, start, PointerPosition::new(300.0, 300.0));
            let config = ShellConfig::default();
            for (px, py) in moves {
                let rect = session_resize_rect(&session, PointerPosition::new(px, py), &config);
                if edge.includes_west() {
                    prop_assert!((rect.right() - start.right()).abs() < 1e-6);
                } else {
                    prop_assert_eq!(rect.x, start.x);
                }
                if edge.includes_north() {
                    prop_assert!((rect.bottom() - start.bottom()).abs() < 1e-6);
                } else {
                    prop_assert_eq!(rect.y, start.y);
                }
            }
        }

        #[test]
        fn drag_never_leaves_vertical_band(
            px in -5000.0f64..5000.0,
            py in -5000.0f64..5000.0,
            offset_y in 0.0f64..40.0,
        ) {
            let session = DragSession { window_id: WindowId(1), offset_x: 0.0, offset_y };
            let viewport = Viewport::new(1280.0, 720.0);
            let (_, y) = drag_position(&session, PointerPosition::new(px, py), viewport, &ShellConfig::default());
            prop_assert!((0.0..=640.0).contains(&y));
        }
    }
}
