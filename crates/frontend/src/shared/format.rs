//! Display formatting for prices and capacities.

/// Card price line: "80 €/nuit".
pub fn price_per_night(price: f64) -> String {
    format!("{} €/nuit", price)
}

/// Card meta: "4 personnes", "1 personne".
pub fn capacity_label(capacity: u32) -> String {
    if capacity > 1 {
        format!("{} personnes", capacity)
    } else {
        format!("{} personne", capacity)
    }
}

/// Detail meta: "4 pers.".
pub fn capacity_short(capacity: u32) -> String {
    format!("{} pers.", capacity)
}

/// Plain amount: "240 €".
pub fn euros(amount: f64) -> String {
    format!("{} €", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_per_night() {
        assert_eq!(price_per_night(80.0), "80 €/nuit");
        assert_eq!(price_per_night(79.5), "79.5 €/nuit");
    }

    #[test]
    fn test_capacity_label() {
        assert_eq!(capacity_label(1), "1 personne");
        assert_eq!(capacity_label(4), "4 personnes");
        assert_eq!(capacity_short(4), "4 pers.");
    }

    #[test]
    fn test_euros() {
        assert_eq!(euros(240.0), "240 €");
    }
}
