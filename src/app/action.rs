/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ExportCv,
    Quit,
}
