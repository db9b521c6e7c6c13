//! Career descriptors shared by every quiz variant.

use serde::Serialize;

/// Static facts about one career, shown alongside its match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerProfile {
    pub career: &'static str,
    pub salary_india: &'static str,
    pub salary_global: &'static str,
    pub skills: &'static [&'static str],
    pub education: &'static str,
    pub description: &'static str,
    pub growth_outlook: &'static str,
    pub work_environment: &'static str,
}

/// Looks up a career by exact name. Some ranked careers have no profile yet.
pub fn lookup(career: &str) -> Option<&'static CareerProfile> {
    CATALOG.iter().find(|p| p.career == career)
}

#[cfg(test)]
pub fn all() -> &'static [CareerProfile] {
    CATALOG
}

const CATALOG: &[CareerProfile] = &[
    CareerProfile {
        career: "Software Developer",
        salary_india: "₹3.5L - ₹20L",
        salary_global: "$60K - $150K",
        skills: &["Programming", "Problem Solving", "Algorithms", "Git", "Database Design"],
        education: "Bachelor's/Master's in Computer Science or related field",
        description: "Designs, builds, and maintains computer programs and applications. Works with various programming languages and frameworks to create software solutions for businesses and consumers.",
        growth_outlook: "Excellent - 22% growth expected over the next decade",
        work_environment: "Office setting, remote work options, collaborative teams",
    },
    CareerProfile {
        career: "Frontend Developer",
        salary_india: "₹3L - ₹18L",
        salary_global: "$60K - $130K",
        skills: &["HTML/CSS", "JavaScript", "React/Vue/Angular", "Responsive Design", "UI Frameworks"],
        education: "Bachelor's in Computer Science or related field + portfolio",
        description: "Specializes in building the user-facing parts of websites and applications. Creates responsive, interactive interfaces that provide a seamless user experience across devices.",
        growth_outlook: "Very Good - 18% growth expected over the next decade",
        work_environment: "Tech companies, agencies, startups, remote work options",
    },
    CareerProfile {
        career: "Backend Developer",
        salary_india: "₹4L - ₹22L",
        salary_global: "$65K - $140K",
        skills: &["Server-side Languages", "Database Management", "API Development", "Security", "Cloud Services"],
        education: "Bachelor's in Computer Science or related field",
        description: "Focuses on server-side architecture and logic. Builds and maintains the technology that powers the databases, APIs, and core application functionality behind the scenes.",
        growth_outlook: "Very Good - 20% growth expected over the next decade",
        work_environment: "Tech companies, enterprise IT departments, remote work options",
    },
    CareerProfile {
        career: "Data Scientist",
        salary_india: "₹5L - ₹25L",
        salary_global: "$70K - $160K",
        skills: &["Statistics", "Machine Learning", "Python/R", "Data Visualization", "SQL"],
        education: "Master's/PhD in Data Science, Statistics, Computer Science or related field",
        description: "Analyzes complex data to find patterns and insights that help businesses make better decisions. Combines expertise in statistics, programming, and domain knowledge.",
        growth_outlook: "Excellent - 35% growth expected over the next decade",
        work_environment: "Corporate office, research labs, remote work options",
    },
    CareerProfile {
        career: "UX/UI Designer",
        salary_india: "₹3L - ₹18L",
        salary_global: "$55K - $120K",
        skills: &["User Research", "Wireframing", "Prototyping", "Figma/Sketch", "Visual Design"],
        education: "Bachelor's in Design, HCI, or related field + portfolio",
        description: "Creates intuitive and engaging digital interfaces that enhance user experience. Combines visual design with usability principles to make products user-friendly.",
        growth_outlook: "Very Good - 15% growth expected over the next decade",
        work_environment: "Design studios, tech companies, agencies, remote work options",
    },
    CareerProfile {
        career: "IT Project Manager",
        salary_india: "₹8L - ₹30L",
        salary_global: "$80K - $140K",
        skills: &["Project Planning", "Team Leadership", "Risk Management", "Stakeholder Communication", "Agile/Scrum"],
        education: "Bachelor's in CS/IT + PMP/Agile certification",
        description: "Oversees technical projects from initiation to completion, managing resources, schedules, and teams to ensure successful delivery of IT initiatives.",
        growth_outlook: "Good - 11% growth expected over the next decade",
        work_environment: "Corporate offices, hybrid work models",
    },
    CareerProfile {
        career: "Cybersecurity Analyst",
        salary_india: "₹4L - ₹22L",
        salary_global: "$65K - $150K",
        skills: &["Network Security", "Penetration Testing", "Security Protocols", "Risk Assessment", "Incident Response"],
        education: "Bachelor's in Cybersecurity, Computer Science + certifications",
        description: "Protects organizations' computer systems and networks from cyber threats, implementing security measures and monitoring for breaches.",
        growth_outlook: "Excellent - 33% growth expected over the next decade",
        work_environment: "Security operations centers, corporate IT departments",
    },
    CareerProfile {
        career: "DevOps Engineer",
        salary_india: "₹5L - ₹25L",
        salary_global: "$70K - $150K",
        skills: &["CI/CD", "Cloud Services", "Automation", "Containerization", "Infrastructure as Code"],
        education: "Bachelor's in Computer Science or related field + certifications",
        description: "Bridges the gap between development and operations by automating and streamlining software delivery processes. Implements CI/CD pipelines and manages cloud infrastructure.",
        growth_outlook: "Excellent - 25% growth expected over the next decade",
        work_environment: "Tech companies, enterprise IT departments, remote work options",
    },
    CareerProfile {
        career: "Technical Writer",
        salary_india: "₹3L - ₹15L",
        salary_global: "$50K - $110K",
        skills: &["Writing", "Technical Documentation", "Information Architecture", "API Documentation", "Research"],
        education: "Bachelor's in English, Technical Communication, or related field",
        description: "Creates clear documentation and guides for technical products, software, and systems that help users understand complex information. Works closely with developers to explain features and functionalities.",
        growth_outlook: "Good - 12% growth expected over the next decade",
        work_environment: "Tech companies, software firms, remote work options",
    },
    CareerProfile {
        career: "Product Manager",
        salary_india: "₹8L - ₹30L",
        salary_global: "$80K - $150K",
        skills: &["Market Research", "Strategic Planning", "Stakeholder Management", "Data Analysis", "Leadership"],
        education: "Bachelor's in Business/Marketing/Technical field + MBA preferred",
        description: "Defines product vision and strategy, working with multiple teams to bring products from conception to market while meeting business goals and user needs.",
        growth_outlook: "Very Good - 10% growth expected over the next decade",
        work_environment: "Corporate offices, startups, hybrid work models",
    },
    CareerProfile {
        career: "Marketing Specialist",
        salary_india: "₹3L - ₹15L",
        salary_global: "$45K - $95K",
        skills: &["Digital Marketing", "Social Media", "Content Creation", "Analytics", "Campaign Management"],
        education: "Bachelor's in Marketing, Communications or related field",
        description: "Develops and implements marketing strategies to promote products/services, manages campaigns across multiple platforms to reach target audiences.",
        growth_outlook: "Good - 10% growth expected over the next decade",
        work_environment: "Marketing agencies, in-house marketing departments",
    },
    CareerProfile {
        career: "Financial Analyst",
        salary_india: "₹4L - ₹20L",
        salary_global: "$60K - $120K",
        skills: &["Financial Modeling", "Data Analysis", "Forecasting", "Excel/Financial Software", "Risk Assessment"],
        education: "Bachelor's/Master's in Finance, Accounting, Economics",
        description: "Analyzes financial data to guide business decisions, evaluates investment opportunities, and creates financial models and forecasts.",
        growth_outlook: "Good - 9% growth expected over the next decade",
        work_environment: "Banks, investment firms, corporate finance departments",
    },
    CareerProfile {
        career: "Management Consultant",
        salary_india: "₹7L - ₹30L+",
        salary_global: "$85K - $170K+",
        skills: &["Problem Solving", "Business Analysis", "Project Management", "Client Relations", "Strategic Thinking"],
        education: "Bachelor's/MBA or other advanced degree, often from top schools",
        description: "Helps organizations improve performance by analyzing problems and developing solutions. Works with management to implement changes that enhance efficiency and profitability.",
        growth_outlook: "Good - 14% growth expected over the next decade",
        work_environment: "Consulting firms, frequent travel to client sites",
    },
    CareerProfile {
        career: "Graphic Designer",
        salary_india: "₹2.5L - ₹12L",
        salary_global: "$40K - $90K",
        skills: &["Visual Design", "Typography", "Adobe Creative Suite", "Branding", "Layout Design"],
        education: "Bachelor's in Graphic Design, Visual Arts + portfolio",
        description: "Creates visual concepts to communicate ideas that inspire, inform, or captivate consumers. Develops the overall layout and production design for advertisements, brochures, magazines, and corporate reports.",
        growth_outlook: "Moderate - 3% growth expected over the next decade",
        work_environment: "Design agencies, in-house creative departments, freelance",
    },
    CareerProfile {
        career: "Content Creator",
        salary_india: "₹2L - ₹20L+ (varies widely)",
        salary_global: "$35K - $100K+ (varies widely)",
        skills: &["Content Production", "Story Telling", "Video Editing", "Social Media Management", "Audience Engagement"],
        education: "Varies - Often bachelor's in Communications, Media, or related field",
        description: "Develops, produces, and manages content across various platforms including social media, blogs, videos, and podcasts to engage target audiences.",
        growth_outlook: "Good - 12% growth in digital content roles",
        work_environment: "Varied - studios, remote work, self-employed",
    },
    CareerProfile {
        career: "Doctor",
        salary_india: "₹5L - ₹50L+",
        salary_global: "$150K - $400K+",
        skills: &["Clinical Knowledge", "Diagnosis", "Patient Care", "Medical Procedures", "Communication"],
        education: "MBBS/MD + Specialty training, license requirements",
        description: "Diagnoses and treats illnesses and injuries, prescribes medications, and provides preventive care and health advice to patients.",
        growth_outlook: "Very Good - 13% growth expected over the next decade",
        work_environment: "Hospitals, clinics, private practices",
    },
    CareerProfile {
        career: "Research Scientist",
        salary_india: "₹4L - ₹20L",
        salary_global: "$70K - $150K",
        skills: &["Research Methods", "Data Analysis", "Lab Techniques", "Technical Writing", "Critical Thinking"],
        education: "Master's/PhD in specific science field",
        description: "Conducts experiments and investigations to advance knowledge in a specific field of science, publishes findings, and develops new products or applications.",
        growth_outlook: "Good - 8% growth expected over the next decade",
        work_environment: "Laboratories, research institutions, universities",
    },
    CareerProfile {
        career: "Psychologist",
        salary_india: "₹3L - ₹15L",
        salary_global: "$60K - $130K",
        skills: &["Psychological Assessment", "Therapy Techniques", "Active Listening", "Research Methods", "Emotional Intelligence"],
        education: "Master's/PhD in Psychology + license/certification",
        description: "Studies cognitive, emotional, and social processes and behavior. May provide therapy to help people with mental health issues or conduct research on psychological phenomena.",
        growth_outlook: "Excellent - 14% growth expected over the next decade",
        work_environment: "Private practices, hospitals, academic institutions",
    },
    CareerProfile {
        career: "Civil Engineer",
        salary_india: "₹3L - ₹20L",
        salary_global: "$60K - $120K",
        skills: &["Structural Analysis", "AutoCAD/Design Software", "Project Management", "Mathematics", "Problem Solving"],
        education: "Bachelor's/Master's in Civil Engineering",
        description: "Designs and oversees construction and maintenance of building structures and infrastructure, such as roads, railways, airports, bridges, harbors, dams, and systems for water supply and sewage treatment.",
        growth_outlook: "Good - 8% growth expected over the next decade",
        work_environment: "Offices, construction sites, government agencies",
    },
    CareerProfile {
        career: "Architect",
        salary_india: "₹3L - ₹20L",
        salary_global: "$65K - $130K",
        skills: &["Design", "CAD/BIM Software", "Spatial Thinking", "Project Management", "Building Codes & Regulations"],
        education: "Bachelor's/Master's in Architecture + license",
        description: "Plans and designs buildings and other structures, considering both form and function, aesthetics and practical elements, including materials, cost, and building codes.",
        growth_outlook: "Good - 8% growth expected over the next decade",
        work_environment: "Architecture firms, some construction site visits",
    },
    CareerProfile {
        career: "Teacher",
        salary_india: "₹2.5L - ₹10L",
        salary_global: "$45K - $85K",
        skills: &["Communication", "Curriculum Design", "Classroom Management", "Assessment Methods", "Patience"],
        education: "Bachelor's in Education or subject area + teaching certification",
        description: "Educates students on specific subjects, creates lesson plans, assesses student progress, and adapts teaching methods to meet diverse student needs.",
        growth_outlook: "Average - 4% growth expected over the next decade",
        work_environment: "Schools, educational institutions",
    },
    CareerProfile {
        career: "Human Resources Manager",
        salary_india: "₹4L - ₹25L",
        salary_global: "$70K - $120K",
        skills: &["Recruitment", "Employee Relations", "Conflict Resolution", "HR Policies", "Leadership"],
        education: "Bachelor's in HR, Business, Psychology + HR certifications",
        description: "Oversees recruitment, employee relations, benefits administration, and ensures compliance with labor laws and regulations.",
        growth_outlook: "Good - 7% growth expected over the next decade",
        work_environment: "Corporate offices across various industries",
    },
    CareerProfile {
        career: "Sales Representative",
        salary_india: "₹2L - ₹15L + commission",
        salary_global: "$40K - $100K + commission",
        skills: &["Negotiation", "Relationship Building", "Product Knowledge", "Communication", "Persuasion"],
        education: "Bachelor's in Business or related field often preferred",
        description: "Sells products or services to potential customers, builds client relationships, and meets sales goals. Acts as a key link between a company and its prospects or clients.",
        growth_outlook: "Average - 5% growth expected over the next decade",
        work_environment: "Office setting with significant field work/client visits",
    },
    CareerProfile {
        career: "Nurse",
        salary_india: "₹2.5L - ₹10L",
        salary_global: "$50K - $110K",
        skills: &["Patient Care", "Medical Procedures", "Clinical Assessment", "Empathy", "Communication"],
        education: "Nursing degree/diploma + license/registration",
        description: "Provides and coordinates patient care, educates patients about health conditions, and provides advice and emotional support to patients and their families.",
        growth_outlook: "Excellent - 9% growth expected over the next decade",
        work_environment: "Hospitals, clinics, long-term care facilities",
    },
    CareerProfile {
        career: "Mechanical Engineer",
        salary_india: "₹3L - ₹20L",
        salary_global: "$60K - $115K",
        skills: &["CAD/CAM Software", "Problem Solving", "Thermodynamics", "Mathematics", "Product Design"],
        education: "Bachelor's/Master's in Mechanical Engineering",
        description: "Designs, develops, builds, and tests mechanical and thermal devices, including tools, engines, and machines. Applies principles of mechanics, thermodynamics, and materials science.",
        growth_outlook: "Good - 7% growth expected over the next decade",
        work_environment: "Manufacturing facilities, research labs, offices",
    },
    CareerProfile {
        career: "Electrical Engineer",
        salary_india: "₹3L - ₹20L",
        salary_global: "$70K - $130K",
        skills: &["Circuit Design", "Programming", "Microcontrollers", "Power Systems", "Testing"],
        education: "Bachelor's/Master's in Electrical Engineering",
        description: "Designs, develops, tests, and supervises the manufacturing of electrical equipment, including electric motors, radar systems, communications systems, or power generation equipment.",
        growth_outlook: "Good - 7% growth expected over the next decade",
        work_environment: "Power plants, manufacturing facilities, offices",
    },
    CareerProfile {
        career: "Lawyer",
        salary_india: "₹3L - ₹30L+",
        salary_global: "$70K - $170K+",
        skills: &["Legal Research", "Critical Thinking", "Negotiation", "Writing", "Public Speaking"],
        education: "Law degree + bar admission/license",
        description: "Provides legal advice and representation to individuals, businesses, or government agencies on various legal issues and disputes.",
        growth_outlook: "Average - 4% growth expected over the next decade",
        work_environment: "Law firms, corporate legal departments, government",
    },
    CareerProfile {
        career: "Writer",
        salary_india: "₹2L - ₹15L",
        salary_global: "$35K - $90K",
        skills: &["Writing", "Editing", "Research", "Creativity", "Time Management"],
        education: "Bachelor's in English, Journalism, Communications or related field",
        description: "Creates written content for various media, including books, articles, websites, scripts, or advertising materials.",
        growth_outlook: "Average - 4% growth expected over the next decade",
        work_environment: "Remote work, publishing houses, media companies",
    },
    CareerProfile {
        career: "Journalist",
        salary_india: "₹2L - ₹12L",
        salary_global: "$40K - $90K",
        skills: &["Reporting", "Writing", "Research", "Interview Techniques", "Ethical Standards"],
        education: "Bachelor's in Journalism, Communications or related field",
        description: "Researches, writes, and reports news stories for newspapers, magazines, websites, television, or radio.",
        growth_outlook: "Declining in traditional media, growing in digital media",
        work_environment: "Newsrooms, field reporting, remote work",
    },
];
