// Static page content

use super::{
    About, CallToAction, Certification, Contact, ExperienceEntry, Fact, Footer, GalleryItem,
    NavItem, Portfolio, Profile, SkillCategory,
};
use crate::nav::SectionId;

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Nehal Patel",
        monogram: "NP",
        badge: "Professional Portfolio",
        tagline: "Fashion Designer & Horticulture Educator",
        summary: "Empowering women through skill development and entrepreneurship in fashion \
                  design, culinary arts, and sustainable agriculture.",
        portrait: "/passport.jpeg",
        phone: "9909242453",
        email: "nehalpatel19777@gmail.com",
        location: "Bhavnagar, Gujarat, India",
    },
    nav: &[
        NavItem { label: "Home", target: SectionId::Home },
        NavItem { label: "About", target: SectionId::About },
        NavItem { label: "Experience", target: SectionId::Experience },
        NavItem { label: "Skills", target: SectionId::Skills },
        NavItem { label: "Gallery", target: SectionId::Gallery },
        NavItem { label: "Contact", target: SectionId::Contact },
    ],
    actions: &[
        CallToAction { label: "Get In Touch", target: SectionId::Contact },
        CallToAction { label: "Learn More", target: SectionId::About },
    ],
    about: About {
        heading: "About Me",
        paragraphs: &[
            "With over 25 years of experience, I am a dedicated fashion designer and \
             horticulture educator committed to empowering women through skill development \
             and entrepreneurship.",
            "I hold a Bachelor of Commerce degree from S.N.D.T. Mahila College, Bhavnagar, \
             and have completed specialized training in Fashion Design and Entrepreneurship \
             Development Programs.",
            "My passion lies in creating sustainable opportunities for women in rural and \
             urban areas through comprehensive training in fashion design, pickle making, \
             herbal products, and organic gardening.",
        ],
        facts: &[
            Fact { label: "Education", value: "B.Com from S.N.D.T. Mahila College" },
            Fact { label: "Location", value: "Bhavnagar, Gujarat, India" },
            Fact { label: "Experience", value: "25+ years" },
        ],
    },
    experience_heading: "Professional Experience",
    experience: &[
        ExperienceEntry {
            title: "Fashion Design Lecturer",
            organization: "Soham Institute",
            period: "",
            description: "Teaching fashion design principles, garment construction, and \
                          professional styling to aspiring designers.",
        },
        ExperienceEntry {
            title: "Trainer - Women Empowerment",
            organization: "Piparla, Bhavnagar",
            period: "",
            description: "Conducting specialized training programs for women in pickle making, \
                          herbal product creation, and sustainable agriculture practices.",
        },
        ExperienceEntry {
            title: "Horticulture Trainer & Deputy Director",
            organization: "Directorate of Horticulture, Bagayat Kacher, Navapar, Bhavnagar",
            period: "",
            description: "Leading women training initiatives in seed saving, microgreens \
                          cultivation, organic fertilizer production, and sustainable gardening \
                          practices.",
        },
    ],
    skills_heading: "Skills & Expertise",
    skills: &[
        SkillCategory {
            title: "Fashion & Design",
            icon: "✨",
            skills: &[
                "Fashion Design",
                "Garment Construction",
                "Hand-made Jewelry",
                "Drawing",
                "Painting",
            ],
        },
        SkillCategory {
            title: "Horticulture & Organic",
            icon: "🌱",
            skills: &[
                "Gardening",
                "Seed Saving",
                "Growing Microgreens",
                "Organic Fertilizers",
                "Kitchen Canning",
            ],
        },
        SkillCategory {
            title: "Entrepreneurship",
            icon: "💼",
            skills: &[
                "Herbal Products",
                "Natural Lip Balm Making",
                "Herbal Hair Oils",
                "Herbal Lotion",
                "Public Speaking",
            ],
        },
    ],
    gallery_heading: "Work & Achievements",
    gallery_intro: "Moments from my training sessions, workshops, and women empowerment \
                    initiatives across Bhavnagar",
    gallery: &[
        GalleryItem {
            image: "/papapa.jpeg",
            title: "Women Empowerment Workshop",
            description: "Training session with women from the community on culinary arts and \
                          skill development.",
        },
        GalleryItem {
            image: "/pip.jpeg",
            title: "Community Training Program",
            description: "Interactive session teaching traditional food preparation and \
                          preservation techniques.",
        },
        GalleryItem {
            image: "/piparla.jpeg",
            title: "Piparla Training Initiative",
            description: "Leading women training programs in Piparla, Bhavnagar for pickle \
                          making and herbal products.",
        },
        GalleryItem {
            image: "/trainer.jpeg",
            title: "Professional Training Session",
            description: "Dedicated to women empowerment through education and skill \
                          development.",
        },
    ],
    certifications_heading: "Certifications & Achievements",
    certifications: &[
        Certification {
            title: "Fashion Designer Certification",
            issuer: "CR Bhatt Institute",
            year: "",
            link: Some("https://drive.google.com/file/d/1XyidBVwo7EIib0BEDg0MgIrPI1T5gobh/view"),
        },
        Certification {
            title: "Entrepreneurship Development Programme (EDP)",
            issuer: "SHUBHAM & NABARD",
            year: "",
            link: Some("https://drive.google.com/file/d/189xx42LFflGRV0uHGMIYizGAIbv2Svr-/view"),
        },
        Certification {
            title: "Fashion Design Training",
            issuer: "SHUBHAM & NABARD",
            year: "",
            link: Some("https://drive.google.com/file/d/1J8lNzYj2LVizmtgzLTFwWsSSrVUecIBY/view"),
        },
        Certification {
            title: "Fashion Design Lecturer Certification",
            issuer: "Professional Development",
            year: "",
            link: Some("https://drive.google.com/file/d/1LJJvmA8mFsGOvxMkBM95cqU-50dDv619/view"),
        },
        Certification {
            title: "Horticulture Trainer Certification",
            issuer: "Directorate of Horticulture",
            year: "",
            link: Some("https://drive.google.com/file/d/1QHFiHMdY1pvVI2yPuyiQzUCWWB9d7c4A/view"),
        },
        Certification {
            title: "Work Experience Certificate",
            issuer: "Professional Experience",
            year: "",
            link: Some("https://drive.google.com/file/d/15y_DQi7dRujiOEfIctJCwBzyK4mPleRn/view"),
        },
    ],
    contact: Contact {
        heading: "Get In Touch",
        intro: "I'd love to hear from you! Whether you're interested in training programs, \
                consultation, or collaboration, feel free to reach out.",
        availability: "Available for consulting, training programs, and women empowerment \
                       initiatives",
    },
    footer: Footer {
        copyright: "© 2025 Nehal Patel. All rights reserved.",
        motto: "Empowering women through education, skill development, and entrepreneurship.",
    },
};
