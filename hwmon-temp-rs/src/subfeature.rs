#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// hwmon subfeatures that carry their own unit scaling.
///
/// The kernel exports sysfs values as integers in fixed-point units, e.g. milli-degrees
/// for temperatures and micro-watts for power. Dividing the raw value by [`Subfeature::scaling`]
/// yields the value in whole units.
pub enum Subfeature {
    /// Voltage input (`in*_input`), millivolts.
    InInput,
    /// Fan speed (`fan*_input`), RPM.
    FanInput,
    /// Temperature input (`temp*_input`), milli-degrees Celsius.
    TempInput,
    /// Temperature offset (`temp*_offset`), milli-degrees Celsius.
    TempOffset,
    /// Current input (`curr*_input`), milliamperes.
    CurrInput,
    /// Relative humidity (`humidity*_input`), milli-percent.
    HumidityInput,
    /// Average power (`power*_average`), microwatts.
    PowerAverage,
    /// Averaging interval for power (`power*_average_interval`), milliseconds.
    PowerAverageInterval,
    /// Energy (`energy*_input`), microjoules.
    EnergyInput,
    /// CPU core reference voltage (`cpu*_vid`), millivolts.
    Vid,
}

impl Subfeature {
    /// Divisor converting the raw sysfs value into whole units.
    pub const fn scaling(self) -> u32 {
        match self {
            Subfeature::InInput
            | Subfeature::TempInput
            | Subfeature::TempOffset
            | Subfeature::CurrInput
            | Subfeature::HumidityInput
            | Subfeature::PowerAverageInterval
            | Subfeature::Vid => 1000,
            Subfeature::FanInput => 1,
            Subfeature::PowerAverage | Subfeature::EnergyInput => 1_000_000,
        }
    }

    /// Converts a raw sysfs value into whole units.
    pub fn scale(self, raw: f64) -> f64 {
        raw / f64::from(self.scaling())
    }
}

#[cfg(test)]
mod tests {
    use super::Subfeature;

    #[test]
    fn scaling_table() {
        assert_eq!(Subfeature::TempInput.scaling(), 1000);
        assert_eq!(Subfeature::FanInput.scaling(), 1);
        assert_eq!(Subfeature::PowerAverage.scaling(), 1_000_000);
        assert_eq!(Subfeature::EnergyInput.scaling(), 1_000_000);
        assert_eq!(Subfeature::Vid.scaling(), 1000);
    }

    #[test]
    fn milli_degrees_to_degrees() {
        assert_eq!(Subfeature::TempInput.scale(45000.0), 45.0);
        assert_eq!(Subfeature::TempInput.scale(-1500.0), -1.5);
        assert_eq!(Subfeature::FanInput.scale(1200.0), 1200.0);
    }
}
