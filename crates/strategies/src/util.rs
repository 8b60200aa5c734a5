use core_types::Observation;

/// Orders observations by value, largest first. Ties keep their input order.
pub(crate) fn by_value_descending(observations: &[Observation]) -> Vec<&Observation> {
    let mut ranked: Vec<&Observation> = observations.iter().collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked
}

/// Orders observations by label, earliest first. Ties keep their input order.
pub(crate) fn by_label_ascending(observations: &[Observation]) -> Vec<&Observation> {
    let mut series: Vec<&Observation> = observations.iter().collect();
    series.sort_by(|a, b| a.label.label_cmp(&b.label));
    series
}

pub(crate) fn values(observations: &[&Observation]) -> Vec<f64> {
    observations.iter().map(|o| o.value).collect()
}
