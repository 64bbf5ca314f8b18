use crate::shared::mailto::MailDraft;

pub const DEFAULT_MANAGER_EMAIL: &str = "employeeManager@gmail.com";

/// Draft telling the employee manager that a report was produced.
pub fn report_generated(manager_email: &str) -> MailDraft {
    MailDraft::new(
        manager_email,
        "Employee Report Generated",
        "Dear Employee Manager,\n\nThe employee report has been generated.\n\nBest regards,\nYour Company",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_generated_uri() {
        let uri = report_generated(DEFAULT_MANAGER_EMAIL).to_mailto_uri();
        assert!(uri.starts_with("mailto:employeeManager%40gmail.com?subject=Employee%20Report%20Generated&body="));
        assert!(uri.contains("Dear%20Employee%20Manager%2C%0A%0A"));
    }
}
