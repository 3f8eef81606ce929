/// A configuration value, bounded by some minimum and maximum.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds.
    ///
    /// On success the previous value is returned, and otherwise the value is returned unused.
    pub fn set(&mut self, value: T) -> Result<T, T> {
        match self.min <= value && value <= self.max {
            true => Ok(std::mem::replace(&mut self.value, value)),
            false => Err(value),
        }
    }
}

#[cfg(test)]
mod config_option_tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut lean = ConfigOption {
            name: "lean",
            min: 0.0,
            max: 1.0,
            value: 0.5,
        };

        assert_eq!(lean.set(0.25), Ok(0.5));
        assert_eq!(lean.set(1.5), Err(1.5));
        assert_eq!(lean.set(-0.1), Err(-0.1));
        assert_eq!(lean.value, 0.25);
    }
}
