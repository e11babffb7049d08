use clap::ValueEnum;

/// A viewer page: which template to load, what to replace in it, and where
/// the result goes by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Viewer {
    /// Unified IP container demo view
    #[default]
    UnifiedIp,
    /// Royalty auditor results view
    RoyaltyAuditor,
}

impl Viewer {
    /// Template file name inside the template directory
    pub fn template_file(self) -> &'static str {
        match self {
            Viewer::UnifiedIp => "unified_ip_viewer.html",
            Viewer::RoyaltyAuditor => "royalty_auditor_viewer.html",
        }
    }

    /// JavaScript variable the template reads its data from
    pub fn variable(self) -> &'static str {
        match self {
            Viewer::UnifiedIp => "demoData",
            Viewer::RoyaltyAuditor => "reportData",
        }
    }

    /// Bare placeholder token, e.g. `DEMO_DATA_PLACEHOLDER`
    pub fn placeholder_token(self) -> &'static str {
        match self {
            Viewer::UnifiedIp => "DEMO_DATA_PLACEHOLDER",
            Viewer::RoyaltyAuditor => "REPORT_DATA_PLACEHOLDER",
        }
    }

    /// The full statement replaced in the template, e.g.
    /// `const demoData = DEMO_DATA_PLACEHOLDER;`
    pub fn placeholder(self) -> String {
        self.statement(self.placeholder_token())
    }

    /// `const <variable> = <value>;`
    pub fn statement(self, value: &str) -> String {
        format!("const {} = {};", self.variable(), value)
    }

    /// File name used when no output path is given
    pub fn default_output_file(self) -> &'static str {
        match self {
            Viewer::UnifiedIp => "unified_ip_demo_view.html",
            Viewer::RoyaltyAuditor => "royalty_auditor_results.html",
        }
    }
}
