// ah-core/src/units.rs

use uom::si::f64::ThermodynamicTemperature as UomThermodynamicTemperature;

// Public canonical unit types (SI, f64)
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kelvin_of(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn celsius_of(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales.
    pub const ZERO_CELSIUS_K: f64 = 273.15;

    /// Gas constant in cal/(mol·K), the unit the activation energies are quoted in.
    pub const R_CAL_PER_MOL_K: f64 = 1.98;
}
