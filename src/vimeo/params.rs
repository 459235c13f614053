use std::collections::BTreeMap;

/// Parameter name to value, ready for a form or query encoder.
pub type ParameterMap = BTreeMap<String, String>;

/// Writes a record's set fields into a shared map under `prefix`.
pub trait SetParameterValues {
    fn set_parameter_values(&self, parameters: &mut ParameterMap, prefix: &str);
}

pub(crate) fn bool_value(value: bool) -> String {
    String::from(if value { "true" } else { "false" })
}

/// `application/x-www-form-urlencoded` body, keys in map order.
pub fn to_form_body(parameters: &ParameterMap) -> String {
    parameters
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<String>>()
        .join("&")
}
