pub struct DefaultsConfig {
    pub temperature_celsius: f64,
    pub pressure_atm: f64,
    pub surface_prefix: String,
    pub qrrho_enabled: bool,
    pub cutoff_wavenumber: f64,
    pub damping_exponent: f64,
    pub average_moment_of_inertia: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            temperature_celsius: 120.0,
            pressure_atm: 1.0,
            surface_prefix: "surf".to_string(),
            qrrho_enabled: true,
            cutoff_wavenumber: 100.0,
            damping_exponent: 4.0,
            average_moment_of_inertia: 1e-44,
        }
    }
}
