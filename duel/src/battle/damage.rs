use duel_data::Effectiveness;

/// The lowest damage variance, as a percentage.
pub const MIN_VARIANCE: u8 = 85;
/// The highest damage variance, as a percentage.
pub const MAX_VARIANCE: u8 = 100;

/// Inputs to a single damage calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageContext {
    pub level: u8,
    pub power: u32,
    pub attack: u16,
    pub defense: u16,
    pub effectiveness: Effectiveness,
    /// Percentage in `[85, 100]`. Values outside the range are clamped.
    pub variance: u8,
}

/// Calculates the damage of a single hit.
///
/// ```text
/// base   = (2 * level / 5 + 2) * power * attack / defense / 50 + 2
/// damage = floor(base * multiplier * variance / 100)
/// ```
///
/// Immunity always deals 0. Any other hit deals at least 1.
pub fn calculate_damage(context: &DamageContext) -> u32 {
    if context.effectiveness.is_immune() {
        return 0;
    }
    let level = context.level as f64;
    let power = context.power as f64;
    let attack = context.attack as f64;
    let defense = context.defense.max(1) as f64;
    let variance = context.variance.clamp(MIN_VARIANCE, MAX_VARIANCE) as f64;

    let base = (2.0 * level / 5.0 + 2.0) * power * attack / defense / 50.0 + 2.0;
    let damage = (base * context.effectiveness.multiplier() * variance / 100.0).floor();
    // Float to integer casts saturate.
    (damage as u32).max(1)
}
