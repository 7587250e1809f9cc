/// Physical constants in normalized units: vacuum permittivity,
/// permeability, and light speed are all one, so field amplitudes and
/// travel times stay near unity.
pub struct PhysicalConstants;

impl PhysicalConstants {
    /// Electric permittivity of free space.
    pub const EPSILON_0: f32 = 1.0;
    /// Magnetic permeability of free space.
    pub const MU_0: f32 = 1.0;
    /// Speed of light, `1 / sqrt(EPSILON_0 * MU_0)`.
    pub const C: f32 = 1.0;
}
