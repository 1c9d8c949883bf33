//! Nicely rounded axis ticks.
//!
//! Steps are 1, 2 or 5 times a power of ten, chosen so the number of ticks
//! lands close to the requested count. The output matches d3's `ticks` so a
//! year axis over 1753..2015 asking for 20 ticks gets the decades 1760..2010.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick bounds `(i1, i2)` and increment.
///
/// A negative increment means ticks are `i / -inc` rather than `i * inc`,
/// which keeps fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced, rounded values between `start` and `stop`.
///
/// Ticks follow the direction of the input: a reversed domain produces
/// descending ticks.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || start.is_nan() || stop.is_nan() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let count = count as f64;
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    (0..n)
        .map(|k| {
            let k = k as f64;
            if reverse {
                value(i2 - k)
            } else {
                value(i1 + k)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_axis_gets_decades() {
        let t = ticks(1753.0, 2015.0, 20);
        assert_eq!(t.first(), Some(&1760.0));
        assert_eq!(t.last(), Some(&2010.0));
        assert_eq!(t.len(), 26);
        assert!(t.windows(2).all(|w| w[1] - w[0] == 10.0));
    }

    #[test]
    fn fractional_steps_are_exact() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn reversed_domain_descends() {
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(ticks(1800.0, 1800.0, 20), vec![1800.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn small_span_steps_below_one() {
        let t = ticks(1800.0, 1805.0, 20);
        assert_eq!(t.len(), 26);
        assert_eq!(t[1], 9001.0 / 5.0);
        assert_eq!(ticks(1800.0, 1810.0, 10), (1800..=1810).map(f64::from).collect::<Vec<_>>());
    }
}
