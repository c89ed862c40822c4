//! Clock geometry: every primitive of the motif as a pure function of the canvas size
//!
//! Nothing here draws. [`compute_geometry`] derives margins, radii, tick and hand
//! segments, the arc samples and the arrowhead once per size; the composer in
//! [`crate::render`] turns the result into paint layers.

use glam::DVec2;

use crate::defaults;
use crate::errors::IconError;
use crate::log::debug;
use crate::types::{Bounds, Dial, Px};

/// A straight stroked segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
    pub width: Px,
}

impl Segment {
    /// Distance between the endpoints (stroke width not included)
    pub fn length(&self) -> Px {
        Px(self.from.distance(self.to))
    }
}

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: DVec2,
    pub radius: Px,
}

impl Disc {
    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.center, self.radius)
    }
}

/// Quarter-hour ticks are longer and thicker than the others
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickClass {
    Major,
    Minor,
}

impl TickClass {
    pub fn for_index(index: usize) -> Self {
        if index % 3 == 0 {
            TickClass::Major
        } else {
            TickClass::Minor
        }
    }

    fn inner_fraction(self) -> f64 {
        match self {
            TickClass::Major => defaults::TICK_INNER_MAJOR,
            TickClass::Minor => defaults::TICK_INNER_MINOR,
        }
    }

    fn role(self) -> StrokeRole {
        match self {
            TickClass::Major => StrokeRole::MajorTick,
            TickClass::Minor => StrokeRole::MinorTick,
        }
    }
}

/// One hour mark; index 0 sits at 12 o'clock and indices run clockwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub class: TickClass,
    pub segment: Segment,
}

/// Every stroked element, with its proportional width and its floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeRole {
    MajorTick,
    MinorTick,
    HourHand,
    MinuteHand,
    Arc,
}

impl StrokeRole {
    /// Width as a fraction of the canvas size, before truncation
    pub fn fraction(self) -> f64 {
        match self {
            StrokeRole::MajorTick => 0.03,
            StrokeRole::MinorTick => 0.02,
            StrokeRole::HourHand => 0.04,
            StrokeRole::MinuteHand => 0.03,
            StrokeRole::Arc => 0.025,
        }
    }

    /// Minimum width in whole pixels, whatever the canvas size
    pub fn floor(self) -> Px {
        match self {
            StrokeRole::MinorTick => Px(1.0),
            StrokeRole::MajorTick | StrokeRole::MinuteHand | StrokeRole::Arc => Px(2.0),
            StrokeRole::HourHand => Px(3.0),
        }
    }

    pub fn width(self, size: Px) -> Px {
        size.stroke(self.fraction(), self.floor().raw())
    }
}

/// All primitives of the motif for one canvas size
#[derive(Debug, Clone, PartialEq)]
pub struct ClockGeometry {
    pub size: Px,
    pub margin: Px,
    pub clock_radius: Px,
    /// Both coordinates of the canvas center (the canvas is square)
    pub center: Px,
    pub shadow: Bounds,
    pub ring: Disc,
    pub face: Disc,
    pub ticks: [Tick; defaults::TICK_COUNT],
    pub hour_hand: Segment,
    pub minute_hand: Segment,
    pub center_dot: Disc,
    pub arc_samples: [DVec2; defaults::ARC_SAMPLES],
    pub arc_width: Px,
    /// Tip first, then the two base vertices
    pub arrowhead: [DVec2; 3],
}

/// Compute the clock geometry for a square canvas of `size` pixels.
///
/// Fails with [`IconError::InvalidSize`] when `size` is not finite or not
/// strictly positive.
pub fn compute_geometry(size: f64) -> Result<ClockGeometry, IconError> {
    let size =
        Px::try_positive(size).map_err(|reason| IconError::InvalidSize { value: size, reason })?;

    let margin = size * defaults::MARGIN;
    let clock_radius = (size - margin * 2.0) / 2.0;
    let center = size / 2.0;
    let origin = DVec2::splat(center.raw());

    let ring = Disc { center: origin, radius: clock_radius };
    let face = Disc {
        center: origin,
        radius: clock_radius - clock_radius * defaults::RING_THICKNESS,
    };
    let shadow = ring
        .bounds()
        .translate(DVec2::splat((size * defaults::SHADOW_OFFSET).raw()));

    let ticks: [Tick; defaults::TICK_COUNT] = std::array::from_fn(|index| {
        let class = TickClass::for_index(index);
        let angle = Dial::hour(index as u32);
        Tick {
            index,
            class,
            segment: Segment {
                from: angle.point(origin, clock_radius * defaults::TICK_OUTER),
                to: angle.point(origin, clock_radius * class.inner_fraction()),
                width: class.role().width(size),
            },
        }
    });

    let hand = |hour: u32, length: f64, role: StrokeRole| Segment {
        from: origin,
        to: Dial::hour(hour).point(origin, clock_radius * length),
        width: role.width(size),
    };
    let hour_hand = hand(defaults::HOUR_HAND_HOUR, defaults::HOUR_HAND_LENGTH, StrokeRole::HourHand);
    let minute_hand = hand(
        defaults::MINUTE_HAND_HOUR,
        defaults::MINUTE_HAND_LENGTH,
        StrokeRole::MinuteHand,
    );

    let center_dot = Disc {
        center: origin,
        radius: clock_radius * defaults::CENTER_DOT_RADIUS,
    };

    let arc_radius = clock_radius * defaults::ARC_RADIUS;
    let last = (defaults::ARC_SAMPLES - 1) as f64;
    let arc_samples: [DVec2; defaults::ARC_SAMPLES] = std::array::from_fn(|k| {
        defaults::ARC_START
            .lerp(defaults::ARC_END, k as f64 / last)
            .point(origin, arc_radius)
    });

    let arrowhead = arrowhead(
        arc_samples[defaults::ARC_SAMPLES - 1],
        defaults::ARC_END,
        clock_radius * defaults::ARROWHEAD_SIZE,
    );

    debug!(
        size = size.raw(),
        margin = margin.raw(),
        clock_radius = clock_radius.raw(),
        "computed clock geometry"
    );

    Ok(ClockGeometry {
        size,
        margin,
        clock_radius,
        center,
        shadow,
        ring,
        face,
        ticks,
        hour_hand,
        minute_hand,
        center_dot,
        arc_samples,
        arc_width: StrokeRole::Arc.width(size),
        arrowhead,
    })
}

/// Triangle with its tip at `tip`; the base vertices sit `side` away along
/// the tip angle rotated by each [`defaults::ARROWHEAD_SPREAD`] offset.
fn arrowhead(tip: DVec2, tip_angle: Dial, side: Px) -> [DVec2; 3] {
    let [a, b] = defaults::ARROWHEAD_SPREAD;
    [
        tip,
        tip + (tip_angle + a).unit() * side.raw(),
        tip + (tip_angle + b).unit() * side.raw(),
    ]
}

impl ClockGeometry {
    /// Consecutive arc samples as `(from, to)` pairs
    pub fn arc_segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.arc_samples.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Every coordinate the motif places on the canvas
    pub fn points(&self) -> Vec<DVec2> {
        let mut points = vec![self.shadow.min, self.shadow.max];
        for disc in [self.ring, self.face, self.center_dot] {
            let b = disc.bounds();
            points.extend([b.min, b.max]);
        }
        for tick in &self.ticks {
            points.extend([tick.segment.from, tick.segment.to]);
        }
        for hand in [self.hour_hand, self.minute_hand] {
            points.extend([hand.from, hand.to]);
        }
        points.extend(self.arc_samples);
        points.extend(self.arrowhead);
        points
    }

    /// Width of every stroked element, tagged with its role
    pub fn strokes(&self) -> Vec<(StrokeRole, Px)> {
        let mut strokes: Vec<_> = self
            .ticks
            .iter()
            .map(|tick| (tick.class.role(), tick.segment.width))
            .collect();
        strokes.push((StrokeRole::HourHand, self.hour_hand.width));
        strokes.push((StrokeRole::MinuteHand, self.minute_hand.width));
        strokes.push((StrokeRole::Arc, self.arc_width));
        strokes
    }

    /// Whether `p` lies inside the square canvas, edges included
    pub fn contains(&self, p: DVec2) -> bool {
        let s = self.size.raw();
        (0.0..=s).contains(&p.x) && (0.0..=s).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;
    use glam::dvec2;

    fn close(a: DVec2, b: DVec2) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn rejects_invalid_sizes() {
        for bad in [0.0, -1.0, -128.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = compute_geometry(bad).unwrap_err();
            assert!(matches!(err, IconError::InvalidSize { .. }), "{bad}: {err:?}");
        }
    }

    #[test]
    fn invalid_size_keeps_its_reason() {
        let reason = |size: f64| match compute_geometry(size) {
            Err(IconError::InvalidSize { reason, .. }) => reason,
            other => panic!("{size}: {other:?}"),
        };
        assert_eq!(reason(0.0), NumericError::Zero);
        assert_eq!(reason(-4.0), NumericError::Negative);
        assert_eq!(reason(f64::NAN), NumericError::NaN);
        assert_eq!(reason(f64::INFINITY), NumericError::Infinite);

        let err = compute_geometry(-4.0).unwrap_err();
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("must be greater than zero, got a negative value")
        );
    }

    #[test]
    fn basic_measurements_at_100() {
        let g = compute_geometry(100.0).unwrap();
        assert!((g.margin.raw() - 10.0).abs() < 1e-12);
        assert!((g.clock_radius.raw() - 40.0).abs() < 1e-12);
        assert_eq!(g.center, Px(50.0));
        assert!((g.face.radius.raw() - 36.0).abs() < 1e-12);
        assert!((g.center_dot.radius.raw() - 3.2).abs() < 1e-12);
        assert!(close(g.shadow.min, dvec2(12.0, 12.0)));
        assert!(close(g.shadow.max, dvec2(92.0, 92.0)));
    }

    #[test]
    fn ticks_start_at_twelve_and_run_clockwise() {
        let g = compute_geometry(100.0).unwrap();
        // radius 40: outer 34, major inner 28, minor inner 30
        assert!(close(g.ticks[0].segment.from, dvec2(50.0, 16.0)));
        assert!(close(g.ticks[0].segment.to, dvec2(50.0, 22.0)));
        assert!(close(g.ticks[3].segment.from, dvec2(84.0, 50.0)));
        assert!(close(g.ticks[6].segment.to, dvec2(50.0, 78.0)));
        assert!(close(g.ticks[9].segment.from, dvec2(16.0, 50.0)));

        let one = g.ticks[1].segment;
        assert!(one.from.x > 50.0 && one.from.y < 50.0);
        assert!((one.length().raw() - 4.0).abs() < 1e-9);
        assert!((g.ticks[0].segment.length().raw() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn tick_classes() {
        let g = compute_geometry(64.0).unwrap();
        let majors: Vec<_> = g
            .ticks
            .iter()
            .filter(|t| t.class == TickClass::Major)
            .map(|t| t.index)
            .collect();
        assert_eq!(majors, vec![0, 3, 6, 9]);
        for (i, tick) in g.ticks.iter().enumerate() {
            assert_eq!(tick.index, i);
        }
    }

    #[test]
    fn hands_point_at_ten_and_two() {
        let g = compute_geometry(100.0).unwrap();
        // Hour hand: length 20 toward 10 o'clock (up and left)
        let h = g.hour_hand;
        assert_eq!(h.from, dvec2(50.0, 50.0));
        assert!((h.length().raw() - 20.0).abs() < 1e-9);
        assert!(h.to.x < 50.0 && h.to.y < 50.0);
        assert!(close(h.to, dvec2(50.0 - 20.0 * 0.75f64.sqrt(), 40.0)));

        // Minute hand: length 28 toward 2 o'clock (up and right)
        let m = g.minute_hand;
        assert!((m.length().raw() - 28.0).abs() < 1e-9);
        assert!(close(m.to, dvec2(50.0 + 28.0 * 0.75f64.sqrt(), 36.0)));
    }

    #[test]
    fn arc_runs_from_six_to_nine() {
        let g = compute_geometry(100.0).unwrap();
        assert_eq!(g.arc_samples.len(), 20);
        assert_eq!(g.arc_segments().count(), 19);
        assert!(close(g.arc_samples[0], dvec2(50.0, 84.0)));
        assert!(close(g.arc_samples[19], dvec2(16.0, 50.0)));
        for p in g.arc_samples {
            assert!((p.distance(dvec2(50.0, 50.0)) - 34.0).abs() < 1e-9);
        }
        // consecutive samples are evenly spaced
        let lengths: Vec<f64> = g.arc_segments().map(|(a, b)| a.distance(b)).collect();
        for l in &lengths {
            assert!((l - lengths[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn arrowhead_sits_on_arc_end() {
        let g = compute_geometry(100.0).unwrap();
        let [tip, a, b] = g.arrowhead;
        assert_eq!(tip, g.arc_samples[19]);
        assert!((tip.distance(a) - 6.0).abs() < 1e-9);
        assert!((tip.distance(b) - 6.0).abs() < 1e-9);
        // base vertices mirror each other across the horizontal through the tip
        assert!((a.x - b.x).abs() < 1e-9);
        assert!(((a.y - tip.y) + (b.y - tip.y)).abs() < 1e-9);
        assert!(a.x > tip.x);
    }

    #[test]
    fn coordinates_stay_on_canvas() {
        for s in 1..=256 {
            let g = compute_geometry(f64::from(s)).unwrap();
            for p in g.points() {
                assert!(g.contains(p), "size {s}: {p:?} off canvas");
            }
        }
    }

    #[test]
    fn strokes_respect_floors() {
        for s in 1..=256 {
            let g = compute_geometry(f64::from(s)).unwrap();
            let strokes = g.strokes();
            assert_eq!(strokes.len(), 15);
            for (role, width) in strokes {
                assert!(width >= role.floor(), "size {s}: {role:?} {width}");
                assert_eq!(width.raw().fract(), 0.0);
            }
        }
    }

    #[test]
    fn floors_dominate_at_16() {
        let g = compute_geometry(16.0).unwrap();
        assert_eq!(g.minute_hand.width, Px(2.0));
        assert_eq!(g.hour_hand.width, Px(3.0));
        assert_eq!(g.arc_width, Px(2.0));
        assert_eq!(g.ticks[0].segment.width, Px(2.0));
        assert_eq!(g.ticks[1].segment.width, Px(1.0));
    }

    #[test]
    fn proportional_widths_at_128() {
        let g = compute_geometry(128.0).unwrap();
        assert_eq!(g.hour_hand.width, Px(5.0));
        assert_eq!(g.minute_hand.width, Px(3.0));
        assert_eq!(g.arc_width, Px(3.0));
        assert_eq!(g.ticks[3].segment.width, Px(3.0));
        assert_eq!(g.ticks[4].segment.width, Px(2.0));
    }

    #[test]
    fn deterministic() {
        let a = compute_geometry(48.0).unwrap();
        let b = compute_geometry(48.0).unwrap();
        assert_eq!(a, b);
        let bits = |g: &ClockGeometry| -> Vec<u64> {
            g.points().iter().flat_map(|p| [p.x.to_bits(), p.y.to_bits()]).collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn doubling_the_size_doubles_every_measurement() {
        let small = compute_geometry(64.0).unwrap();
        let large = compute_geometry(128.0).unwrap();

        assert_eq!(large.margin, small.margin * 2.0);
        assert_eq!(large.clock_radius, small.clock_radius * 2.0);
        assert_eq!(large.center, small.center * 2.0);
        assert_eq!(large.face.radius, small.face.radius * 2.0);
        assert_eq!(large.center_dot.radius, small.center_dot.radius * 2.0);
        assert_eq!(large.hour_hand.to, small.hour_hand.to * 2.0);
        assert_eq!(large.minute_hand.to, small.minute_hand.to * 2.0);

        for (a, b) in small.points().iter().zip(large.points()) {
            assert_eq!(b, *a * 2.0);
        }
    }
}
