#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    TemplateLookup,
    TemplateKeys,
    TemplateExport,
    TemplateResolve,
    TemplateCoverage,
    TemplateQa,
    LocaleLoad,
    LocaleSave,
    LocaleDiff,
    LocaleMerge,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "template.lookup" => Command::TemplateLookup,
            "template.keys" => Command::TemplateKeys,
            "template.export" => Command::TemplateExport,
            "template.resolve" => Command::TemplateResolve,
            "template.coverage" => Command::TemplateCoverage,
            "template.qa" => Command::TemplateQa,
            "locale.load" => Command::LocaleLoad,
            "locale.save" => Command::LocaleSave,
            "locale.diff" => Command::LocaleDiff,
            "locale.merge" => Command::LocaleMerge,
            _ => Command::Unknown,
        }
    }
}
