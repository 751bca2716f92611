use crate::models::{LabeledEntry, LabeledList};

static SPECIALIZATIONS: [LabeledEntry; 8] = [
    LabeledEntry::new(
        "Anxiety & Stress Management",
        "Comprehensive treatment for generalized anxiety, panic disorders, social anxiety, and chronic stress. Using CBT, mindfulness, and relaxation techniques to help you regain control.",
    )
    .with_tag("anxiety"),
    LabeledEntry::new(
        "Depression & Mood Disorders",
        "Evidence-based treatment for depression, bipolar disorder, and mood-related challenges. Helping you rediscover hope, purpose, and emotional balance.",
    )
    .with_tag("depression"),
    LabeledEntry::new(
        "Trauma & PTSD (EMDR Certified)",
        "Specialized EMDR Part II certified treatment for trauma, PTSD, and complex trauma. Safe, effective processing of difficult experiences to promote healing.",
    )
    .with_tag("trauma"),
    LabeledEntry::new(
        "Grief, Loss & Bereavement",
        "Compassionate support through loss of loved ones, relationship endings, job loss, or other significant life changes. Honoring your unique grieving process.",
    )
    .with_tag("grief"),
    LabeledEntry::new(
        "Relationship Issues",
        "Improving communication, resolving conflicts, and strengthening connections in romantic, family, and professional relationships.",
    )
    .with_tag("relationships"),
    LabeledEntry::new(
        "Life Transitions & Adjustment",
        "Support through major life changes including career transitions, relocation, retirement, parenthood, and other significant adjustments.",
    )
    .with_tag("life-transitions"),
    LabeledEntry::new(
        "Adolescent & Family Issues",
        "Specialized support for teenagers and families navigating adolescent development, behavioral challenges, and parent-child relationships.",
    )
    .with_tag("family"),
    LabeledEntry::new(
        "Cultural Identity & Immigration",
        "Understanding the unique challenges of multicultural identity, immigration stress, and navigating between different cultural contexts.",
    )
    .with_tag("cultural"),
];

static FAQS: [LabeledEntry; 6] = [
    LabeledEntry::new(
        "What should I expect in my first therapy session?",
        "Your first session is an opportunity for us to get to know each other. I'll ask about what brought you to therapy, your goals, and your background. We'll discuss my approach, answer any questions you have about the therapy process, and begin to develop a treatment plan. This session is typically 90 minutes to allow for comprehensive intake.",
    ),
    LabeledEntry::new(
        "How do I know if therapy is right for me?",
        "Therapy can be beneficial for anyone experiencing emotional distress, major life changes, relationship difficulties, or simply wanting personal growth. Our free consultation can help determine if therapy, and specifically working with me, would be beneficial for your situation.",
    ),
    LabeledEntry::new(
        "What's the difference between telehealth and in-person therapy?",
        "Both telehealth and in-person therapy are effective treatment options. Telehealth offers convenience and accessibility, while in-person sessions provide face-to-face interaction. I offer both options to meet your preferences and needs.",
    ),
    LabeledEntry::new(
        "Do you accept insurance?",
        "I work with most major insurance providers in Virginia, including Aetna, Anthem, Cigna, and UnitedHealthcare. I also offer self-pay options and limited sliding scale rates based on financial need.",
    ),
    LabeledEntry::new(
        "Is therapy confidential?",
        "Yes. The only exceptions are situations involving imminent danger to yourself or others, suspected abuse of a child or vulnerable adult, or if required by a court order. We'll discuss confidentiality in detail during our first session.",
    ),
    LabeledEntry::new(
        "Can you prescribe medication?",
        "As a Licensed Professional Counselor, I cannot prescribe medication. I work collaboratively with psychiatrists and primary care physicians when medication might be beneficial and can provide referrals.",
    ),
];

static CRISIS_RESOURCES: [LabeledEntry; 5] = [
    LabeledEntry::new(
        "National Suicide Prevention Lifeline",
        "988: 24/7 crisis support for people in suicidal crisis or emotional distress",
    )
    .with_link("tel:988")
    .with_tag("immediate"),
    LabeledEntry::new(
        "Crisis Text Line",
        "Text HOME to 741741: 24/7 crisis support via text message with trained crisis counselors",
    )
    .with_link("sms:741741?&body=HOME")
    .with_tag("immediate"),
    LabeledEntry::new(
        "National Domestic Violence Hotline",
        "1-800-799-7233: support for domestic violence survivors and those in abusive relationships",
    )
    .with_link("tel:1-800-799-7233")
    .with_tag("safety"),
    LabeledEntry::new(
        "Emergency Services",
        "911: for immediate medical emergencies or when someone is in imminent danger",
    )
    .with_link("tel:911")
    .with_tag("emergency"),
    LabeledEntry::new(
        "Virginia Crisis Line",
        "1-877-276-7474: state-wide 24/7 mental health crisis support",
    )
    .with_link("https://vacrisisline.org/")
    .with_tag("local"),
];

static TESTIMONIALS: [LabeledEntry; 5] = [
    LabeledEntry::new(
        "Former Client, Northern Virginia",
        "Her compassionate approach and evidence-based techniques helped me navigate through anxiety and trauma. I finally feel like I have the tools to handle life's challenges with confidence.",
    )
    .with_tag("Anxiety & Trauma Recovery"),
    LabeledEntry::new(
        "Former Client, Richmond Area",
        "After struggling with PTSD for years, I finally found healing. Her patience, expertise, and cultural sensitivity made all the difference in my recovery journey.",
    )
    .with_tag("PTSD & EMDR Therapy"),
    LabeledEntry::new(
        "Former Client, Ashburn, VA",
        "As a first-generation immigrant, finding a therapist who understood my cultural background was crucial. Her cultural competence helped me work through identity issues and family conflicts.",
    )
    .with_tag("Cultural Identity & Family Issues"),
    LabeledEntry::new(
        "Former Client, Virginia Beach",
        "The DBT skills I learned have been invaluable. The structured approach to emotional regulation and distress tolerance has helped me build healthier relationships.",
    )
    .with_tag("DBT Skills & Emotional Regulation"),
    LabeledEntry::new(
        "Former Client, Loudoun County",
        "The telehealth sessions were convenient and just as effective as in-person therapy. I felt heard and supported throughout my healing process.",
    )
    .with_tag("Depression & Life Transitions"),
];

static CREDENTIALS: [LabeledEntry; 6] = [
    LabeledEntry::new(
        "Licensed Professional Counselor",
        "Full licensure by the Virginia Department of Health Professions to provide independent professional counseling services.",
    ),
    LabeledEntry::new(
        "National Certified Counselor",
        "National Board for Certified Counselors (NBCC) certification demonstrating adherence to national professional standards.",
    ),
    LabeledEntry::new(
        "EMDR PT-II Certified",
        "Advanced EMDR training for treating trauma and PTSD.",
    ),
    LabeledEntry::new(
        "Certified DBT Provider",
        "Comprehensive training in DBT skills and interventions for emotional regulation and distress tolerance.",
    ),
    LabeledEntry::new(
        "Certified Mindfulness Practitioner",
        "Training in mindfulness-based approaches for anxiety, depression, and stress management.",
    ),
    LabeledEntry::new(
        "Graduate Degrees",
        "Advanced graduate education in both Clinical Mental Health Counseling and Clinical Psychology.",
    ),
];

static SECTIONS: [LabeledList; 5] = [
    LabeledList {
        key: "specializations",
        title: "Areas of Specialization",
        entries: &SPECIALIZATIONS,
    },
    LabeledList {
        key: "faqs",
        title: "Frequently Asked Questions",
        entries: &FAQS,
    },
    LabeledList {
        key: "crisis-resources",
        title: "Crisis Resources",
        entries: &CRISIS_RESOURCES,
    },
    LabeledList {
        key: "testimonials",
        title: "What Clients Say",
        entries: &TESTIMONIALS,
    },
    LabeledList {
        key: "credentials",
        title: "Credentials & Certifications",
        entries: &CREDENTIALS,
    },
];

pub fn section_keys() -> Vec<&'static str> {
    SECTIONS.iter().map(|s| s.key).collect()
}

pub fn section(key: &str) -> Option<&'static LabeledList> {
    SECTIONS.iter().find(|s| s.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lookup() {
        let faqs = section("faqs").unwrap();
        assert_eq!(faqs.title, "Frequently Asked Questions");
        assert!(!faqs.entries.is_empty());
        assert!(section("pricing").is_none());
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys = section_keys();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_crisis_resources_all_have_links() {
        let crisis = section("crisis-resources").unwrap();
        assert!(crisis.entries.iter().all(|e| e.link.is_some()));
        assert_eq!(crisis.entries[0].link, Some("tel:988"));
    }

    #[test]
    fn test_specialization_tags_match_concern_values() {
        use crate::models::Concern;

        let specs = section("specializations").unwrap();
        for entry in specs.entries {
            let tag = entry.tag.unwrap();
            assert!(Concern::parse(tag).is_some(), "unknown concern tag {tag}");
        }
    }
}
