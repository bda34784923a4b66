use std::collections::BTreeMap;

use crate::contact::{self, Field, Validation};

/// Below this width the resume page stacks its selector above the preview.
pub const COMPACT_WIDTH: u32 = 647;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResumeKind {
    #[default]
    FullStack,
    General,
    Projects,
}

impl ResumeKind {
    pub const ALL: [ResumeKind; 3] = [ResumeKind::FullStack, ResumeKind::General, ResumeKind::Projects];

    pub fn id(&self) -> &'static str {
        match self {
            ResumeKind::FullStack => "fullstack",
            ResumeKind::General => "general",
            ResumeKind::Projects => "projects",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeOption {
    pub kind: ResumeKind,
    pub title: &'static str,
    pub filename: &'static str,
    pub description: &'static str,
}

pub static RESUME_OPTIONS: [ResumeOption; 3] = [
    ResumeOption {
        kind: ResumeKind::FullStack,
        title: "Full Stack Engineer Resume",
        filename: "Full Stack Engineer with Projects.docx",
        description: "Technical resume focused on software development skills and experience",
    },
    ResumeOption {
        kind: ResumeKind::General,
        title: "General Professional Resume",
        filename: "GENERAL RESUME..docx",
        description: "Versatile resume highlighting leadership and transferable skills",
    },
    ResumeOption {
        kind: ResumeKind::Projects,
        title: "Scrum Master - Agile Project Lead",
        filename: "Scrum Master - Agile Project Lead.docx",
        description:
            "Leadership-focused resume showcasing project management and agile methodologies",
    },
];

pub fn find_resume(kind: ResumeKind) -> Option<&'static ResumeOption> {
    RESUME_OPTIONS.iter().find(|r| r.kind == kind)
}

pub fn pdf_filename(resume: Option<&ResumeOption>) -> String {
    resume
        .map(|r| r.filename.replace(".docx", ".pdf"))
        .unwrap_or_else(|| "resume.pdf".to_string())
}

/// Site-relative path of a pre-built resume document.
pub fn document_path(filename: &str) -> String {
    format!("/resumes/{}", urlencoding::encode(filename))
}

pub fn is_compact(width: u32) -> bool {
    width < COMPACT_WIDTH
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeContent {
    pub headline: &'static str,
    pub summary: &'static str,
    pub skills: &'static [(&'static str, &'static str)],
    pub experience: &'static [Role],
}

const LARKIST: Role = Role {
    title: "Lead Full Stack Engineer",
    organization: "Larkist",
    period: "2021 - Present",
    highlights: &[
        "Led end-to-end development with AI model integration for real-time sentiment analysis",
        "Managed a cross-functional team of 5 software engineers and 3 data scientists",
        "Implemented real-time sentiment analysis and content filtering",
    ],
};

const LAMBDA: Role = Role {
    title: "Team Lead",
    organization: "Lambda School",
    period: "2019 - 2020",
    highlights: &[
        "Mentored cohorts of full-stack students through React and Node curricula",
        "Ran daily stand-ups, code reviews and sprint retrospectives",
    ],
};

static FULL_STACK: ResumeContent = ResumeContent {
    headline: "Full Stack Software Engineer",
    summary: "Engineer building React front ends and Node, Python and PostgreSQL back ends, from product planning to deployment.",
    skills: &[
        ("Frontend", "React, Redux, TypeScript, JavaScript, HTML5, CSS3"),
        ("Backend", "Node, Express, Python, Django, PostgreSQL, MongoDB"),
        ("Tooling", "Git, Jest, React Testing Library, Heroku, Netlify"),
    ],
    experience: &[LARKIST, LAMBDA],
};

static GENERAL: ResumeContent = ResumeContent {
    headline: "Technology Professional",
    summary: "Versatile professional combining software delivery with leadership, communication and customer focus.",
    skills: &[
        ("Leadership", "Team building, mentoring, stakeholder communication"),
        ("Technical", "Web development, data analysis, process automation"),
    ],
    experience: &[LARKIST, LAMBDA],
};

static PROJECTS: ResumeContent = ResumeContent {
    headline: "Scrum Master - Agile Project Lead",
    summary: "Agile lead who keeps cross-functional teams shipping through clear planning and steady delivery cadence.",
    skills: &[
        ("Agile", "Scrum, Kanban, sprint planning, backlog refinement"),
        ("Delivery", "Roadmapping, risk tracking, retrospectives, Trello, Jira"),
    ],
    experience: &[LARKIST, LAMBDA],
};

/// Resume body rendered for `kind`.
pub fn content(kind: ResumeKind) -> &'static ResumeContent {
    match kind {
        ResumeKind::FullStack => &FULL_STACK,
        ResumeKind::General => &GENERAL,
        ResumeKind::Projects => &PROJECTS,
    }
}

/// Request to email a resume link to someone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeShare {
    pub to_email: String,
    pub from_name: String,
    pub message: String,
}

impl ResumeShare {
    pub fn validate(&self) -> Validation {
        let mut errors = BTreeMap::new();
        if self.from_name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required".to_string());
        }
        if let Some(e) = contact::email_error(&self.to_email) {
            errors.insert(Field::Email, e.to_string());
        }
        Validation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

pub fn share_subject(owner: &str, resume: &ResumeOption) -> String {
    format!("Resume from {owner} - {}", resume.title)
}

pub fn share_body(share: &ResumeShare, resume: &ResumeOption, owner: &str, origin: &str) -> String {
    format!(
        "\nHello,\n\n{} has shared {owner}'s resume with you.\n\nMessage: {}\n\nResume Type: {}\nDescription: {}\n\nYou can download the resume directly from: {origin}{}\n\nBest regards,\n{owner} Portfolio System\n",
        share.from_name,
        share.message,
        resume.title,
        resume.description,
        document_path(resume.filename),
    )
}

pub fn share_link(share: &ResumeShare, resume: &ResumeOption, owner: &str, origin: &str) -> String {
    contact::mailto(
        &share.to_email,
        &share_subject(owner, resume),
        &share_body(share, resume, owner, origin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_and_pdf_filename() {
        let full = find_resume(ResumeKind::FullStack);
        assert_eq!(
            pdf_filename(full),
            "Full Stack Engineer with Projects.pdf"
        );
        // only the extension is swapped
        assert_eq!(
            pdf_filename(find_resume(ResumeKind::General)),
            "GENERAL RESUME..pdf"
        );
        assert_eq!(pdf_filename(None), "resume.pdf");
    }

    #[test]
    fn test_every_kind_has_option_and_content() {
        for kind in ResumeKind::ALL {
            let option = find_resume(kind).expect("every kind should have an option");
            assert_eq!(option.kind, kind);
            assert_eq!(ResumeKind::from_id(kind.id()), Some(kind));
            assert!(!content(kind).experience.is_empty());
        }
        assert_eq!(ResumeKind::from_id("nope"), None);
    }

    #[test]
    fn test_content_selection() {
        assert_eq!(content(ResumeKind::Projects).headline, "Scrum Master - Agile Project Lead");
        assert_ne!(content(ResumeKind::FullStack), content(ResumeKind::General));
    }

    #[test]
    fn test_compact() {
        assert!(is_compact(646));
        assert!(!is_compact(647));
    }

    #[test]
    fn test_share_validation() {
        let share = ResumeShare::default();
        let res = share.validate();
        assert!(!res.is_valid);
        assert_eq!(res.error(Field::Name), Some("Name is required"));
        assert_eq!(res.error(Field::Email), Some("Email is required"));

        let share = ResumeShare {
            to_email: "recruiter@company.com".to_string(),
            from_name: "Jane".to_string(),
            message: String::new(),
        };
        assert!(share.validate().is_valid);
    }

    #[test]
    fn test_share_link() {
        let share = ResumeShare {
            to_email: "recruiter@company.com".to_string(),
            from_name: "Jane".to_string(),
            message: "Worth a look".to_string(),
        };
        let resume = find_resume(ResumeKind::FullStack).unwrap();
        let link = share_link(&share, resume, "Jonathan Holloway", "https://example.dev");
        assert!(link.starts_with("mailto:recruiter@company.com?subject="));
        let decoded = urlencoding::decode(&link).unwrap();
        assert!(decoded.contains("Resume from Jonathan Holloway - Full Stack Engineer Resume"));
        assert!(decoded.contains("Jane has shared"));
        assert!(decoded.contains("https://example.dev/resumes/"));
    }

    #[test]
    fn test_share_link_recipient_cannot_add_headers() {
        let share = ResumeShare {
            to_email: "hr@firm.io&bcc=spy".to_string(),
            from_name: "Jane".to_string(),
            message: String::new(),
        };
        assert!(share.validate().is_valid);
        let resume = find_resume(ResumeKind::General).unwrap();
        let link = share_link(&share, resume, "Jonathan Holloway", "https://example.dev");
        let (path, query) = link.split_once('?').unwrap();
        assert_eq!(path, "mailto:hr@firm.io%26bcc%3Dspy");
        assert!(!query.contains("bcc="));
    }
}
