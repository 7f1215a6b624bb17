use log::debug;

/// Which tier a logged call belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Controller,
    Service,
    Mapper,
}

impl Layer {
    fn marker(self) -> &'static str {
        match self {
            Layer::Controller => "Controller =====>",
            Layer::Service => "Service =====>",
            Layer::Mapper => "Mapper =====>",
        }
    }
}

/// Records entry into `type_name.method()` at debug level.
pub fn log_call(layer: Layer, type_name: &str, method: &str) {
    debug!("{}", format_call(layer, type_name, method));
}

fn format_call(layer: Layer, type_name: &str, method: &str) -> String {
    format!("{}{}.{}()", layer.marker(), type_name, method)
}
