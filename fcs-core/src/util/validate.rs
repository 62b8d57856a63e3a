use fcs_entities::film::FilmId;

/// Accept only numbers that denote a film id, i.e.
/// finite numbers without a fractional part.
pub fn film_id_from_number(number: Option<f64>) -> Option<FilmId> {
    number.and_then(|n| FilmId::try_from(n).ok())
}

/// Returns the trimmed text if anything remains.
pub fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
