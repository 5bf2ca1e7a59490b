use crate::models::Doctor;

/// Catalog page filter: case-insensitive match on full name or specialty,
/// optionally narrowed to doctors that accept health insurance.
pub fn filter_doctors<'a>(doctors: &'a [Doctor], search: &str, only_insurance: bool) -> Vec<&'a Doctor> {
    let term = search.trim().to_lowercase();

    doctors
        .iter()
        .filter(|doctor| {
            if term.is_empty() {
                return true;
            }
            let full_name = format!("{} {}", doctor.first_name, doctor.last_name).to_lowercase();
            let specialty = doctor.specialty.as_deref().unwrap_or("").to_lowercase();
            full_name.contains(&term) || specialty.contains(&term)
        })
        .filter(|doctor| !only_insurance || doctor.works_with_health_insurance)
        .collect()
}
