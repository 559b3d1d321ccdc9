use clap::ValueEnum;

use tailgroup_engine::OutputFormat;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum OutputFormatFlag {
    Clsx,
    Array,
    Template,
    Raw,
}

impl OutputFormatFlag {
    pub(crate) const fn as_domain(self) -> OutputFormat {
        match self {
            OutputFormatFlag::Clsx => OutputFormat::ClsxCall,
            OutputFormatFlag::Array => OutputFormat::Array,
            OutputFormatFlag::Template => OutputFormat::TemplateLiteral,
            OutputFormatFlag::Raw => OutputFormat::RawMapping,
        }
    }
}
