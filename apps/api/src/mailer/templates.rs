//! Notification subjects and HTML bodies.

use crate::models::resume::ResumeApplication;

/// Acknowledgement sent to a contact-form submitter.
pub fn contact_ack(name: &str, message: &str) -> (String, String) {
    let subject = "Thank you for contacting us!".to_string();
    let html = format!(
        r#"<html>
    <body>
        <h2>Hello {name},</h2>
        <p>Thank you for reaching out to us!</p>
        <p>Your message: {message}</p>
        <br>
        <p>Best Regards,<br>The Careers Team</p>
    </body>
</html>"#
    );
    (subject, html)
}

/// Acknowledgement sent to an applicant after a resume upload.
pub fn applicant_ack(name: &str, role: &str) -> (String, String) {
    let subject = format!("Thank you for Applying - {role}");
    let html = format!(
        r#"<p>Hi {name},</p>
<p>Thank you for applying for the job "<strong>{role}</strong>". We have received your application and will review it shortly.</p>
<br>
<p>Best regards,</p>
<p><strong>The Careers Team</strong></p>"#
    );
    (subject, html)
}

/// Alert sent to the administrative recipient after a resume upload.
/// Includes the retrieval URL for the stored resume.
pub fn admin_alert(application: &ResumeApplication, resume_url: &str) -> (String, String) {
    let subject = format!("New application received - {}", application.role);
    let html = format!(
        r#"<p>A new application has been received for "<strong>{role}</strong>".</p>
<ul>
    <li>Name: {name}</li>
    <li>Email: {email}</li>
    <li>Phone: {phone}</li>
</ul>
<p>Resume: <a href="{resume_url}">{resume_url}</a></p>"#,
        role = application.role,
        name = application.name,
        email = application.email,
        phone = application.phone,
    );
    (subject, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn application() -> ResumeApplication {
        ResumeApplication {
            name: "Asha".to_string(),
            phone: "9999999999".to_string(),
            email: "asha@example.com".to_string(),
            role: "Engineer".to_string(),
            applied_at: Utc::now(),
            resume: String::new(),
        }
    }

    #[test]
    fn test_applicant_ack_names_the_role() {
        let (subject, html) = applicant_ack("Asha", "Engineer");
        assert!(subject.contains("Engineer"));
        assert!(html.contains("Hi Asha,"));
    }

    #[test]
    fn test_admin_alert_carries_the_retrieval_url() {
        let url = "http://localhost:8000/download/abc123";
        let (_, html) = admin_alert(&application(), url);
        assert!(html.contains(url));
        assert!(html.contains("asha@example.com"));
    }
}
