#[cfg(test)]
mod json_descriptions;
#[cfg(test)]
mod scenarios;
