use crate::core::config::FormConfig;
use crate::features::donors::models::{BloodGroup, Gender};
use crate::shared::constants::{
    FIELD_BLOOD_GROUP, FIELD_FIRST_NAME, FIELD_GENDER, FIELD_LAST_DONATION_DATE, FIELD_LAST_NAME,
    FIELD_PHONE_NUMBER,
};
use crate::shared::forms::{FieldDescriptor, FieldKind, FormDescriptor};

/// Describe the blood donor intake form.
///
/// First name, phone number and last donation date are mandatory. Select
/// options carry the stored codes as values.
pub fn intake_form(config: &FormConfig) -> FormDescriptor {
    let gender = Gender::ALL.into_iter().fold(
        FieldDescriptor::new(FIELD_GENDER, FieldKind::Select, "Gender"),
        |field, g| field.with_option(g.code(), g.label()),
    );
    let blood_group = BloodGroup::ALL.into_iter().fold(
        FieldDescriptor::new(FIELD_BLOOD_GROUP, FieldKind::Select, "Blood Group"),
        |field, bg| field.with_option(bg.code(), bg.label()),
    );

    let mut form = FormDescriptor::new(&config.title, &config.submit_label);
    form.add_field(FieldDescriptor::new(FIELD_FIRST_NAME, FieldKind::Text, "First Name").mandatory())
        .add_field(FieldDescriptor::new(FIELD_LAST_NAME, FieldKind::Text, "Last Name"))
        .add_field(gender)
        .add_field(
            FieldDescriptor::new(FIELD_PHONE_NUMBER, FieldKind::Phone, "Phone Number").mandatory(),
        )
        .add_field(blood_group)
        .add_field(
            FieldDescriptor::new(FIELD_LAST_DONATION_DATE, FieldKind::Date, "Last Donation Date")
                .mandatory(),
        );
    form.client_script = config.client_script.clone();
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_form_layout() {
        let form = intake_form(&FormConfig::default());

        assert_eq!(form.title, "Blood Requirement Registration Form");
        assert_eq!(form.submit_label, "Submit");
        let ids: Vec<&str> = form.fields.iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            [
                "firstName",
                "lastName",
                "gender",
                "phoneNumber",
                "bloodGroup",
                "lastDonationDate"
            ]
        );
    }

    #[test]
    fn test_mandatory_fields() {
        let form = intake_form(&FormConfig::default());
        let mandatory: Vec<&str> = form
            .fields
            .iter()
            .filter(|f| f.mandatory)
            .map(|f| f.id)
            .collect();
        assert_eq!(mandatory, [FIELD_FIRST_NAME, FIELD_PHONE_NUMBER, FIELD_LAST_DONATION_DATE]);
    }

    #[test]
    fn test_select_options_carry_codes() {
        let form = intake_form(&FormConfig::default());

        let gender = form.field(FIELD_GENDER).expect("gender field");
        assert_eq!(gender.kind, FieldKind::Select);
        let genders: Vec<(&str, &str)> = gender
            .options
            .iter()
            .map(|o| (o.value.as_str(), o.text.as_str()))
            .collect();
        assert_eq!(genders, [("1", "Male"), ("2", "Female"), ("3", "Custom")]);

        let blood_group = form.field(FIELD_BLOOD_GROUP).expect("blood group field");
        assert_eq!(blood_group.options.len(), 8);
        assert_eq!(blood_group.options[6].value, "7");
        assert_eq!(blood_group.options[6].text, "O+");
    }

    #[test]
    fn test_client_script_from_config() {
        let config = FormConfig {
            client_script: Some("/static/donor_intake.js".to_string()),
            ..FormConfig::default()
        };
        let form = intake_form(&config);
        assert_eq!(form.client_script.as_deref(), Some("/static/donor_intake.js"));
        assert!(intake_form(&FormConfig::default()).client_script.is_none());
    }
}
