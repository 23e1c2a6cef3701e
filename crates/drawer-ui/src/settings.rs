//! Per-drawer timing and threshold configuration.

use drawer_core::{DrawerHost, Easing};
use drawer_foundation::ReleaseThresholds;
use std::str::FromStr;

/// Markup attribute overriding [`DrawerSettings::transition_ms`].
pub const TRANSITION_ATTRIBUTE: &str = "data-drawer-transition-ms";
/// Markup attribute overriding [`DrawerSettings::unmount_delay_ms`].
pub const UNMOUNT_ATTRIBUTE: &str = "data-drawer-unmount-ms";
/// Markup attribute overriding [`DrawerSettings::easing`].
pub const EASING_ATTRIBUTE: &str = "data-drawer-easing";
/// Markup attribute overriding the flick threshold, in px/ms.
pub const COMMIT_VELOCITY_ATTRIBUTE: &str = "data-drawer-commit-velocity";
/// Markup attribute overriding the dismiss fraction of the viewport.
pub const DISMISS_FRACTION_ATTRIBUTE: &str = "data-drawer-dismiss-fraction";

/// Configuration for one drawer instance.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerSettings {
    /// Delay between showing the root and starting the open animation.
    /// Browsers skip a transition started in the same task as `display: block`.
    pub open_guard_ms: u32,
    /// Duration of the declared transform/opacity transitions.
    pub transition_ms: u32,
    /// Delay between starting the close animation and hiding the root.
    pub unmount_delay_ms: u32,
    pub easing: Easing,
    pub thresholds: ReleaseThresholds,
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            open_guard_ms: 10,
            transition_ms: 200,
            unmount_delay_ms: 400,
            easing: Easing::EaseOut,
            thresholds: ReleaseThresholds::default(),
        }
    }
}

impl DrawerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open_guard_ms(mut self, millis: u32) -> Self {
        self.open_guard_ms = millis;
        self
    }

    pub fn with_transition_ms(mut self, millis: u32) -> Self {
        self.transition_ms = millis;
        self
    }

    pub fn with_unmount_delay_ms(mut self, millis: u32) -> Self {
        self.unmount_delay_ms = millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_commit_velocity(mut self, px_per_ms: f32) -> Self {
        self.thresholds.commit_velocity = px_per_ms;
        self
    }

    pub fn with_dismiss_fraction(mut self, fraction: f32) -> Self {
        self.thresholds.dismiss_fraction = fraction;
        self
    }

    /// Apply overrides found on the markup via `lookup(attribute)`.
    ///
    /// Values that fail to parse or are out of range are logged and leave
    /// the setting unchanged.
    pub fn with_attribute_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = parse_attribute::<u32>(&lookup, TRANSITION_ATTRIBUTE, |_| true) {
            self.transition_ms = value;
        }
        if let Some(value) = parse_attribute::<u32>(&lookup, UNMOUNT_ATTRIBUTE, |_| true) {
            self.unmount_delay_ms = value;
        }
        if let Some(raw) = lookup(EASING_ATTRIBUTE) {
            match Easing::parse(&raw) {
                Some(easing) => self.easing = easing,
                None => log::warn!("ignoring {EASING_ATTRIBUTE}={raw:?}"),
            }
        }
        if let Some(value) =
            parse_attribute::<f32>(&lookup, COMMIT_VELOCITY_ATTRIBUTE, valid_commit_velocity)
        {
            self.thresholds.commit_velocity = value;
        }
        if let Some(value) =
            parse_attribute::<f32>(&lookup, DISMISS_FRACTION_ATTRIBUTE, valid_dismiss_fraction)
        {
            self.thresholds.dismiss_fraction = value;
        }
        self
    }

    /// Settings for `root`, starting from `self` and applying its markup overrides.
    pub fn for_root<H: DrawerHost>(&self, host: &H, root: &H::Node) -> Self {
        self.clone()
            .with_attribute_overrides(|name| host.attribute(root, name))
            .normalized()
    }

    /// Keep the unmount delay at least as long as the transition, otherwise
    /// the root would be hidden while the sheet is still sliding out.
    /// Out-of-range thresholds fall back to their defaults.
    pub fn normalized(mut self) -> Self {
        let defaults = ReleaseThresholds::default();
        if !valid_commit_velocity(&self.thresholds.commit_velocity) {
            log::warn!(
                "commit velocity {} must be finite and positive; using {}",
                self.thresholds.commit_velocity,
                defaults.commit_velocity
            );
            self.thresholds.commit_velocity = defaults.commit_velocity;
        }
        if !valid_dismiss_fraction(&self.thresholds.dismiss_fraction) {
            log::warn!(
                "dismiss fraction {} must be within (0, 1]; using {}",
                self.thresholds.dismiss_fraction,
                defaults.dismiss_fraction
            );
            self.thresholds.dismiss_fraction = defaults.dismiss_fraction;
        }
        if self.unmount_delay_ms < self.transition_ms {
            log::warn!(
                "unmount delay {}ms is shorter than the {}ms transition; raising it",
                self.unmount_delay_ms,
                self.transition_ms
            );
            self.unmount_delay_ms = self.transition_ms;
        }
        self
    }
}

fn valid_commit_velocity(px_per_ms: &f32) -> bool {
    px_per_ms.is_finite() && *px_per_ms > 0.0
}

fn valid_dismiss_fraction(fraction: &f32) -> bool {
    *fraction > 0.0 && *fraction <= 1.0
}

fn parse_attribute<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    accept: impl Fn(&T) -> bool,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => Some(value),
        _ => {
            log::warn!("ignoring {name}={raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_css_contract() {
        let settings = DrawerSettings::default();
        assert_eq!(settings.open_guard_ms, 10);
        assert_eq!(settings.transition_ms, 200);
        assert_eq!(settings.unmount_delay_ms, 400);
        assert_eq!(settings.thresholds.commit_velocity, 0.5);
        assert_eq!(settings.thresholds.dismiss_fraction, 0.5);
    }

    #[test]
    fn attribute_overrides_apply_and_bad_values_are_ignored() {
        let settings = DrawerSettings::default().with_attribute_overrides(|name| match name {
            TRANSITION_ATTRIBUTE => Some("300".into()),
            UNMOUNT_ATTRIBUTE => Some("soon".into()),
            EASING_ATTRIBUTE => Some("linear".into()),
            COMMIT_VELOCITY_ATTRIBUTE => Some(" 0.8 ".into()),
            _ => None,
        });
        assert_eq!(settings.transition_ms, 300);
        assert_eq!(settings.unmount_delay_ms, 400);
        assert_eq!(settings.easing, Easing::Linear);
        assert_eq!(settings.thresholds.commit_velocity, 0.8);
        assert_eq!(settings.thresholds.dismiss_fraction, 0.5);
    }

    #[test]
    fn out_of_range_thresholds_are_ignored() {
        for (attribute, raw) in [
            (COMMIT_VELOCITY_ATTRIBUTE, "-1"),
            (COMMIT_VELOCITY_ATTRIBUTE, "0"),
            (COMMIT_VELOCITY_ATTRIBUTE, "NaN"),
            (COMMIT_VELOCITY_ATTRIBUTE, "inf"),
            (DISMISS_FRACTION_ATTRIBUTE, "NaN"),
            (DISMISS_FRACTION_ATTRIBUTE, "0"),
            (DISMISS_FRACTION_ATTRIBUTE, "-0.5"),
            (DISMISS_FRACTION_ATTRIBUTE, "1.5"),
            (DISMISS_FRACTION_ATTRIBUTE, "inf"),
        ] {
            let settings = DrawerSettings::default()
                .with_attribute_overrides(|name| (name == attribute).then(|| raw.to_string()));
            assert_eq!(
                settings.thresholds,
                ReleaseThresholds::default(),
                "{attribute}={raw} should be ignored"
            );
        }
    }

    #[test]
    fn full_dismiss_fraction_is_accepted() {
        let settings = DrawerSettings::default().with_attribute_overrides(|name| {
            (name == DISMISS_FRACTION_ATTRIBUTE).then(|| "1".into())
        });
        assert_eq!(settings.thresholds.dismiss_fraction, 1.0);
    }

    #[test]
    fn normalized_restores_invalid_thresholds() {
        let settings = DrawerSettings::new()
            .with_commit_velocity(-1.0)
            .with_dismiss_fraction(f32::NAN)
            .normalized();
        assert_eq!(settings.thresholds, ReleaseThresholds::default());
    }

    #[test]
    fn normalized_keeps_unmount_after_transition() {
        let settings = DrawerSettings::new()
            .with_transition_ms(500)
            .with_unmount_delay_ms(100)
            .normalized();
        assert_eq!(settings.unmount_delay_ms, 500);

        let untouched = DrawerSettings::new().normalized();
        assert_eq!(untouched, DrawerSettings::default());
    }
}
