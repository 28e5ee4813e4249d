//! Tests for frame submission through a recording frame sink.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use arc_showcase_core::{PresentationConfig, Session, Viewport};
use arc_showcase_hal::{FrameHeader, FrameSink, MeshDraw, MeshKind};
use glam::{Mat4, Vec3};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq)]
enum SinkCall {
    Begin(FrameHeader),
    Draw(MeshDraw),
    End,
    Resize(u32, u32),
}

#[derive(Clone, Default)]
struct MockSink {
    calls: Rc<RefCell<Vec<SinkCall>>>,
    /// Fail the nth draw call (0-based).
    fail_draw: Option<usize>,
}

#[derive(Debug, PartialEq)]
struct MockError;

impl MockSink {
    fn new() -> Self {
        Self::default()
    }

    fn draws(&self) -> Vec<MeshDraw> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                SinkCall::Draw(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    fn header(&self) -> Option<FrameHeader> {
        self.calls.borrow().iter().find_map(|c| match c {
            SinkCall::Begin(h) => Some(*h),
            _ => None,
        })
    }
}

impl FrameSink for MockSink {
    type Error = MockError;

    fn begin_frame(&mut self, header: &FrameHeader) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(SinkCall::Begin(*header));
        Ok(())
    }

    fn draw_mesh(&mut self, draw: &MeshDraw) -> Result<(), Self::Error> {
        let drawn = self.draws().len();
        if self.fail_draw == Some(drawn) {
            return Err(MockError);
        }
        self.calls.borrow_mut().push(SinkCall::Draw(*draw));
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(SinkCall::End);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(SinkCall::Resize(width, height));
        Ok(())
    }
}

fn session() -> Session {
    let mut s = Session::new(&PresentationConfig::default(), Viewport::new(1280, 720)).unwrap();
    settle(&mut s);
    s
}

fn settle(s: &mut Session) {
    for _ in 0..1000 {
        if s.is_idle() {
            return;
        }
        s.tick(FRAME);
    }
    panic!("session never went idle");
}

fn visit(s: &mut Session, index: usize) {
    assert!(s.go_to_view(index), "go_to_view({index}) refused");
    settle(s);
}

#[test]
fn overview_draws_ground_and_every_box() {
    let s = session();
    let mut sink = MockSink::new();
    s.render(&mut sink).unwrap();

    let calls = sink.calls.borrow().clone();
    assert!(matches!(calls.first(), Some(SinkCall::Begin(_))));
    assert_eq!(calls.last(), Some(&SinkCall::End));

    let draws = sink.draws();
    assert_eq!(draws.len(), 9);
    assert_eq!(draws[0].mesh, MeshKind::Ground);
    assert!(draws[0].receive_shadow);
    for (i, d) in draws[1..].iter().enumerate() {
        assert_eq!(d.mesh, MeshKind::Box { id: i as u32 + 1 });
        assert!(d.cast_shadow);
        assert_eq!(d.opacity, 1.0);
    }
}

#[test]
fn header_carries_camera_and_lights() {
    let s = session();
    let mut sink = MockSink::new();
    s.render(&mut sink).unwrap();

    let header = sink.header().unwrap();
    let camera = s.camera();
    assert_eq!(header.eye, camera.position().to_array());
    assert_eq!(header.view, camera.view_matrix().to_cols_array());
    assert_eq!(header.projection, camera.projection_matrix().to_cols_array());

    let lighting = PresentationConfig::default().lighting;
    assert_eq!(header.clear_color, lighting.clear_color);
    assert_eq!(header.sun, lighting.sun);
    assert_eq!(header.ambient, lighting.ambient);
}

#[test]
fn box_model_places_box_on_the_arc() {
    let s = session();
    let mut sink = MockSink::new();
    s.render(&mut sink).unwrap();

    let draws = sink.draws();
    for (b, d) in s.scene().boxes().iter().zip(&draws[1..]) {
        let model = Mat4::from_cols_array(&d.model);
        let origin = model.transform_point3(Vec3::ZERO);
        assert!(origin.distance(b.position()) < 1e-4);
    }
}

#[test]
fn rotation_view_draws_only_the_last_box() {
    let mut s = session();
    visit(&mut s, 10);
    visit(&mut s, 12);
    let mut sink = MockSink::new();
    s.render(&mut sink).unwrap();

    let draws = sink.draws();
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].mesh, MeshKind::Box { id: 8 });

    // A quarter turn maps +X onto -Z.
    let model = Mat4::from_cols_array(&draws[0].model);
    let x_axis = model.transform_vector3(Vec3::X).normalize();
    assert!(x_axis.distance(Vec3::NEG_Z) < 1e-4, "{x_axis:?}");
}

#[test]
fn settled_fade_draws_nothing() {
    let mut s = session();
    visit(&mut s, 15);
    let mut sink = MockSink::new();
    s.render(&mut sink).unwrap();

    assert!(sink.draws().is_empty());
    assert_eq!(sink.calls.borrow().len(), 2);
}

#[test]
fn draw_error_stops_the_frame() {
    let s = session();
    let mut sink = MockSink {
        fail_draw: Some(3),
        ..MockSink::new()
    };
    assert_eq!(s.render(&mut sink), Err(MockError));

    assert_eq!(sink.draws().len(), 3);
    assert_ne!(sink.calls.borrow().last(), Some(&SinkCall::End));
}
