//! Section anchors shared by the navigation bar and the page shell.

pub const ABOUT: &str = "about";
pub const EXPERIENCE: &str = "experience";
pub const SKILLS: &str = "skills";
pub const CERTIFICATIONS: &str = "certifications";
pub const CONTACT: &str = "contact";

/// Page sections in render order: `(anchor id, nav label, section title)`.
pub const SECTIONS: &[(&str, &str, &str)] = &[
    (ABOUT, "About", "Executive Profile"),
    (EXPERIENCE, "Experience", "Career Trajectory"),
    (SKILLS, "Skills", "Technical Capabilities"),
    (CERTIFICATIONS, "Certifications", "Accreditations"),
    (CONTACT, "Contact", "Connect"),
];
