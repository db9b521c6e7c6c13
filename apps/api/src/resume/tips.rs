use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResumeTip {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionGuide {
    pub title: &'static str,
    pub content: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeGuidance {
    pub tips: &'static [ResumeTip],
    pub sections: &'static [SectionGuide],
    pub ats_checklist: &'static [&'static str],
}

pub const GUIDANCE: ResumeGuidance = ResumeGuidance {
    tips: TIPS,
    sections: SECTIONS,
    ats_checklist: ATS_CHECKLIST,
};

const TIPS: &[ResumeTip] = &[
    ResumeTip {
        title: "Keep it concise",
        description: "Limit your resume to one or two pages. Focus on the most relevant experiences and skills.",
    },
    ResumeTip {
        title: "Tailor to the job",
        description: "Customize your resume for each job application by highlighting relevant skills and experiences.",
    },
    ResumeTip {
        title: "Use action verbs",
        description: "Start bullet points with strong action verbs like 'achieved', 'managed', 'implemented', etc.",
    },
    ResumeTip {
        title: "Quantify achievements",
        description: "Include specific numbers and percentages to demonstrate the impact of your work.",
    },
    ResumeTip {
        title: "Proofread carefully",
        description: "Ensure there are no spelling or grammatical errors. Have someone else review it as well.",
    },
    ResumeTip {
        title: "Use a clean design",
        description: "Choose a clean, professional layout with consistent formatting and easy-to-read fonts.",
    },
];

const SECTIONS: &[SectionGuide] = &[
    SectionGuide {
        title: "Contact Information",
        content: "Include your name, phone number, email address, LinkedIn profile, and optionally your location.",
        example: "John Doe\n(123) 456-7890\njohn.doe@example.com\nlinkedin.com/in/johndoe",
    },
    SectionGuide {
        title: "Professional Summary",
        content: "A brief 2-3 sentence overview of your professional background, key skills, and career goals.",
        example: "Results-driven UX Designer with 5+ years of experience creating user-centered digital products for diverse clients. Skilled in user research, wireframing, and prototyping with a focus on accessibility and usability.",
    },
    SectionGuide {
        title: "Work Experience",
        content: "List your work history in reverse chronological order. Include company name, job title, dates, and bulleted accomplishments.",
        example: "UX Designer | ABC Company | Jan 2020 - Present\n\
                  • Led redesign of core product, increasing user engagement by 35%\n\
                  • Conducted user research with 50+ participants to inform design decisions\n\
                  • Collaborated with developers to implement designs that reduced user errors by 25%",
    },
    SectionGuide {
        title: "Education",
        content: "Include degrees, schools, graduation dates, and relevant coursework or honors.",
        example: "Bachelor of Arts in Design | University Name | 2019\n\
                  • Graduated with honors (GPA: 3.8/4.0)\n\
                  • Relevant coursework: User Interface Design, Web Development, Human-Computer Interaction",
    },
    SectionGuide {
        title: "Skills",
        content: "List relevant technical and soft skills, organized by category if helpful.",
        example: "Technical: Figma, Adobe XD, Sketch, HTML/CSS, InVision\n\
                  UX Methods: User Research, Wireframing, Prototyping, Usability Testing\n\
                  Soft Skills: Team Collaboration, Project Management, Client Communication",
    },
];

const ATS_CHECKLIST: &[&str] = &[
    "Use standard section headings (Experience, Education, Skills)",
    "Include keywords from the job description",
    "Avoid using graphics, tables, or headers/footers",
    "Submit in PDF format to preserve formatting",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidance_contents() {
        assert_eq!(GUIDANCE.tips.len(), 6);
        assert_eq!(GUIDANCE.sections[0].title, "Contact Information");
        assert_eq!(GUIDANCE.sections.len(), 5);
    }

    #[test]
    fn test_multiline_examples_keep_line_breaks() {
        let work = GUIDANCE.sections[2].example;
        assert_eq!(work.lines().count(), 4);
        assert!(work.lines().nth(1).unwrap().starts_with('•'));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(GUIDANCE).unwrap();
        assert!(json["atsChecklist"].is_array());
        assert_eq!(json["tips"][0]["title"], "Keep it concise");
    }
}
