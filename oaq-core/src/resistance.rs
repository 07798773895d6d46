//! MOx resistance estimation
//!
//! Converts the raw ADC code of each sequencer step into the resistance of
//! the metal-oxide element. The conversion uses two calibration bounds read
//! once at bring-up (`mox_lr`, `mox_er`) and the gain byte of the
//! configuration block:
//!
//! ```text
//! adc <  lr         ->  1e-3 ohm   (below range)
//! adc >= er         ->  1e12 ohm   (railed)
//! otherwise         ->  gain * 1000 * (adc - lr) / (er - adc)
//! ```
//!
//! Saturated values are not errors. Downstream stages clamp them to
//! `[100, 1e12]` and treat them as "sensor railed".

use crate::constants::sensor::{
    ADC_RESULT_LEN, MOX_BOUNDS_LEN, RMOX_CEILING_OHM, RMOX_CLASSIFIER_MAX_OHM,
    RMOX_CLASSIFIER_MIN_OHM, RMOX_FLOOR_OHM, RMOX_GAIN_UNIT_OHM, SEQUENCER_STEPS,
};

/// Calibration bounds of the ADC range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoxBounds {
    /// Lower bound (`mox_lr`)
    pub lr: u16,
    /// Upper bound (`mox_er`)
    pub er: u16,
}

impl MoxBounds {
    /// Create bounds from explicit values
    pub const fn new(lr: u16, er: u16) -> Self {
        Self { lr, er }
    }

    /// Decode the init result block `[lr_hi, lr_lo, er_hi, er_lo]`
    pub fn parse(raw: &[u8; MOX_BOUNDS_LEN]) -> Self {
        Self {
            lr: u16::from_be_bytes([raw[0], raw[1]]),
            er: u16::from_be_bytes([raw[2], raw[3]]),
        }
    }
}

/// Resistance of one sequencer step in ohms
pub fn estimate_resistance(adc_code: u16, lr_bound: u16, er_bound: u16, gain_byte: u8) -> f32 {
    // codes below the lower bound saturate low
    let Some(above_lr) = adc_code.checked_sub(lr_bound) else {
        return RMOX_FLOOR_OHM;
    };
    if adc_code >= er_bound {
        return RMOX_CEILING_OHM;
    }

    let below_er = er_bound - adc_code;
    gain_byte as f32 * RMOX_GAIN_UNIT_OHM * above_lr as f32 / below_er as f32
}

/// Decode a full ADC result block into per-step resistances
pub fn rmox_from_adc(
    adc: &[u8; ADC_RESULT_LEN],
    bounds: MoxBounds,
    gain_byte: u8,
) -> [f32; SEQUENCER_STEPS] {
    let mut rmox = [0.0; SEQUENCER_STEPS];
    for (step, code) in adc.chunks_exact(2).enumerate() {
        let code = u16::from_be_bytes([code[0], code[1]]);
        rmox[step] = estimate_resistance(code, bounds.lr, bounds.er, gain_byte);
    }

    let railed = rmox.iter().filter(|&&r| r == RMOX_CEILING_OHM).count();
    if railed > 0 {
        log_debug!("{} of {} sequencer steps railed", railed, SEQUENCER_STEPS);
    }

    rmox
}

/// Clamp resistances to the range the classifier was trained on
pub fn clamp_rmox(rmox: &[f32; SEQUENCER_STEPS]) -> [f32; SEQUENCER_STEPS] {
    let mut clamped = *rmox;
    for r in clamped.iter_mut() {
        *r = r.clamp(RMOX_CLASSIFIER_MIN_OHM, RMOX_CLASSIFIER_MAX_OHM);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_lower_bound_saturates_at_floor() {
        assert_eq!(estimate_resistance(99, 100, 60000, 140), 1e-3);
        assert_eq!(estimate_resistance(0, 1, 60000, 140), 1e-3);
    }

    #[test]
    fn at_or_above_upper_bound_saturates_at_ceiling() {
        assert_eq!(estimate_resistance(60000, 100, 60000, 140), 1e12);
        assert_eq!(estimate_resistance(u16::MAX, 100, 60000, 140), 1e12);
    }

    #[test]
    fn lower_bound_itself_is_zero_ohm() {
        assert_eq!(estimate_resistance(100, 100, 60000, 140), 0.0);
    }

    #[test]
    fn midrange_value() {
        // 10 kOhm gain, halfway between the bounds -> 10 kOhm
        let r = estimate_resistance(30050, 100, 60000, 10);
        assert!((r - 10_000.0).abs() < 1.0);
    }

    #[test]
    fn adc_block_is_big_endian() {
        let mut adc = [0u8; ADC_RESULT_LEN];
        adc[0] = 0x75;
        adc[1] = 0x62; // 30050
        for step in 1..SEQUENCER_STEPS {
            adc[2 * step] = 0xFF;
            adc[2 * step + 1] = 0xFF;
        }
        let rmox = rmox_from_adc(&adc, MoxBounds::new(100, 60000), 10);
        assert!((rmox[0] - 10_000.0).abs() < 1.0);
        assert!(rmox[1..].iter().all(|&r| r == 1e12));
    }

    #[test]
    fn clamp_limits() {
        let mut rmox = [5_000.0; SEQUENCER_STEPS];
        rmox[0] = 1e-3;
        rmox[1] = 1e13;
        let clamped = clamp_rmox(&rmox);
        assert_eq!(clamped[0], 100.0);
        assert_eq!(clamped[1], 1e12);
        assert_eq!(clamped[2], 5_000.0);
    }

    #[test]
    fn bounds_decode() {
        let bounds = MoxBounds::parse(&[0x00, 0x64, 0xEA, 0x60]);
        assert_eq!(bounds, MoxBounds::new(100, 60000));
    }
}
