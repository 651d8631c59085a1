use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn arb_strokes() -> impl Strategy<Value = Vec<Vec<Vector2<f64>>>> {
    let point = (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| vector![x, y]);
    prop::collection::vec(prop::collection::vec(point, 1..20), 1..5)
}

/// Random-walk scribble: `strokes` strokes of `len` points each.
fn scribble(seed: u64, strokes: usize, len: usize) -> Sketch {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sketch = Sketch::new(strokes * len, strokes);
    for _ in 0..strokes {
        sketch.open_stroke().unwrap();
        let mut p = vector![rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0)];
        for _ in 0..len {
            sketch.push(p);
            p += vector![rng.gen_range(-6.0..6.0), rng.gen_range(-6.0..6.0)];
        }
    }
    sketch
}

proptest! {
    #[test]
    fn resample_keeps_strokes_and_spacing(strokes in arb_strokes(), rate in 0.5f64..20.0) {
        let s = Sketch::from_strokes(&strokes);
        prop_assume!(s.max_distance().unwrap() > 1e-3);
        let interval = s.sampling_interval(rate).unwrap();
        let r = s.resample(rate).unwrap();
        prop_assert_eq!(r.stroke_count(), s.stroke_count());
        prop_assert!(r.point_count() <= r.capacity());
        for (orig, res) in s.strokes().zip(r.strokes()) {
            prop_assert_eq!(orig[0], res[0]);
            for w in res.windows(2) {
                let d = (w[1] - w[0]).norm();
                prop_assert!((d - interval).abs() <= 1e-9 * interval.max(1.0));
            }
        }
    }

    #[test]
    fn normalize_yields_zero_mean_unit_std(strokes in arb_strokes()) {
        let s = Sketch::from_strokes(&strokes);
        let sd = s.std();
        prop_assume!(sd.x > 1e-2 && sd.y > 1e-2);
        let n = s.normalize().unwrap();
        prop_assert_eq!(n.stroke_starts(), s.stroke_starts());
        prop_assert!(n.centroid().norm() < 1e-9);
        prop_assert!((n.std() - vector![1.0, 1.0]).norm() < 1e-9);
    }

    #[test]
    fn transform_is_bounded_and_monotonic(strokes in arb_strokes()) {
        let s = Sketch::from_strokes(&strokes);
        let b = s.bounding_box().unwrap();
        prop_assume!(b.extent().x > 0.0 && b.extent().y > 0.0);
        let t = s.transform_to_grid().unwrap();
        for q in t.points() {
            prop_assert!(q.x.fract() == 0.0 && q.y.fract() == 0.0);
            prop_assert!((0.0..=23.0).contains(&q.x) && (0.0..=23.0).contains(&q.y));
        }
        let src = s.points();
        let dst = t.points();
        for i in 0..src.len() {
            for j in 0..src.len() {
                if src[i].x <= src[j].x {
                    prop_assert!(dst[i].x <= dst[j].x);
                }
                if src[i].y <= src[j].y {
                    prop_assert!(dst[i].y <= dst[j].y);
                }
            }
        }
        prop_assert!(dst.iter().any(|q| q.x == 0.0) && dst.iter().any(|q| q.x == 23.0));
        prop_assert!(dst.iter().any(|q| q.y == 0.0) && dst.iter().any(|q| q.y == 23.0));
    }

    #[test]
    fn transform_matches_scale_then_divide(
        strokes in arb_strokes(),
        min in (-150.0f64..0.0, -150.0f64..0.0),
        width in (1.0f64..300.0, 1.0f64..300.0),
    ) {
        let s = Sketch::from_strokes(&strokes);
        let (max_x, max_y) = (min.0 + width.0, min.1 + width.1);
        let t = s.transform(min.0, min.1, max_x, max_y).unwrap();
        for (p, q) in s.points().iter().zip(t.points()) {
            prop_assert_eq!(q.x, ((p.x - min.0) * 23.0 / (max_x - min.0)).floor());
            prop_assert_eq!(q.y, ((p.y - min.1) * 23.0 / (max_y - min.1)).floor());
        }
    }

    #[test]
    fn transform_on_integer_grid(v in 0u32..200, range in 1u32..200) {
        let v = f64::from(v.min(range));
        let r = f64::from(range);
        let s = Sketch::from_strokes(&[vec![vector![v, v]]]);
        let t = s.transform(0.0, 0.0, r, r).unwrap();
        let expected = (v * 23.0 / r).floor();
        prop_assert_eq!(t.points()[0], vector![expected, expected]);
    }
}

#[test]
fn pipeline_leaves_sources_untouched() {
    let s = scribble(42, 3, 40);
    let snapshot = s.clone();
    let n = s.normalize().unwrap();
    let r = n.resample(10.0).unwrap();
    let t = r.transform_to_grid().unwrap();
    assert_eq!(s, snapshot);
    assert_eq!(t.stroke_count(), 3);
    assert_eq!(t.point_count(), r.point_count());
    assert!(t.points().iter().all(|p| (0.0..=23.0).contains(&p.x)));
}

#[test]
fn resample_order_is_free() {
    // normalize∘resample and resample∘normalize both keep stroke heads aligned.
    let s = scribble(7, 2, 25);
    let a = s.resample(8.0).unwrap().normalize().unwrap();
    let b = s.normalize().unwrap().resample(8.0).unwrap();
    assert_eq!(a.stroke_count(), b.stroke_count());
    let heads_b: Vec<_> = b.strokes().map(|st| st[0]).collect();
    let n = s.normalize().unwrap();
    let heads_n: Vec<_> = n.strokes().map(|st| st[0]).collect();
    assert_eq!(heads_b, heads_n);
}

#[test]
fn higher_rate_gives_denser_samples() {
    let s = scribble(3, 1, 60);
    let coarse = s.resample(4.0).unwrap();
    let fine = s.resample(16.0).unwrap();
    assert!(fine.point_count() > coarse.point_count());
}
