/// Short human description of what a logger belongs to.
#[must_use]
pub fn describe_logger(logger: &str) -> String {
	if logger.starts_with("homeassistant.core") {
		return "Core Home Assistant functionality".to_string();
	}
	if logger.starts_with("homeassistant.components.") {
		let component = logger.rsplit('.').next().unwrap_or(logger);
		return format!("{component} integration");
	}
	if logger.starts_with("homeassistant.helpers") {
		return "Home Assistant helpers".to_string();
	}
	if let Some(rest) = logger.strip_prefix("custom_components.") {
		let component = rest.split('.').next().unwrap_or(rest);
		return format!("Custom: {component}");
	}
	"Logger".to_string()
}

#[cfg(test)]
mod tests {
	use super::describe_logger;

	#[test]
	fn describes_known_namespaces() {
		assert_eq!(
			describe_logger("homeassistant.core"),
			"Core Home Assistant functionality"
		);
		assert_eq!(
			describe_logger("homeassistant.components.zha.core.gateway"),
			"gateway integration"
		);
		assert_eq!(
			describe_logger("homeassistant.helpers.entity"),
			"Home Assistant helpers"
		);
		assert_eq!(
			describe_logger("custom_components.logger_manager.sensor"),
			"Custom: logger_manager"
		);
		assert_eq!(describe_logger("aiohttp"), "Logger");
	}
}
