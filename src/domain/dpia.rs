use crate::domain::cloneable::entity;
use crate::domain::labels::Labels;

entity! {
    Risk as "Risk", overrides RiskOverrides {
        id_: String,
        impact: u32,
        likelyhood: u32,
        accepted_mitigations: Labels,
    }
}

entity! {
    SupervisoryAuthorityVeredict as "SupervisoryAuthorityVeredict", overrides SupervisoryAuthorityVeredictOverrides {
        contact: Labels,
        allowed: bool,
    }
}

entity! {
    Purpose as "Purpose", overrides PurposeOverrides {
        id_: String,
        adequate: bool,
        relevant: bool,
        limited: bool,
    }
}

entity! {
    /// One processing activity and its lawful-basis findings.
    Processing as "Processing", overrides ProcessingOverrides {
        id_: String,
        automated_decisions: bool,
        explicit: bool,
        fair: bool,
        is_official_authority: bool,
        large_scale_processing: bool,
        lawful: bool,
        legal_impact_for_the_user: bool,
        legally_mandated: bool,
        legitimate: bool,
        legitimate_interest: Labels,
        professional_secrecy: bool,
        public_interest: bool,
        purposes: Vec<Purpose>,
        required_for_contract: Labels,
        requires_new_technologies: bool,
        risk_to_rights_and_freedoms_of: Labels,
        risks: Labels,
        scores_users: bool,
        specific: bool,
        supervisory_authority_veredict: SupervisoryAuthorityVeredict,
        systematic_monitoring: bool,
        transparent: bool,
        vital_interest: Labels,
    }
}

entity! {
    PersonalDatum as "PersonalDatum", overrides PersonalDatumOverrides {
        id_: String,
        kind: String,
        required_by_law: Labels,
        necessary_to_enter_contract: Labels,
        destinataries: Labels,
        retention_period: String,
        abides_by_code_of_conduct: bool,
        purposes: Labels,
        transfers_to_third_parties: Labels,
    }
}

entity! {
    /// Data Protection Officer.
    Dpo as "DPO", overrides DpoOverrides {
        name: String,
        contact: String,
    }
}

entity! {
    /// Data Protection Impact Assessment.
    Dpia as "DPIA", overrides DpiaOverrides {
        last_update: String,
        responsible: Labels,
        #[serde(rename = "DPO_")]
        dpo: Vec<Dpo>,
        personal_data: Vec<PersonalDatum>,
        risks: Vec<Risk>,
        personal_data_processing_whitelist: Labels,
        #[serde(rename = "personal_data_processing_that_requires_DPIA")]
        personal_data_processing_that_requires_dpia: Labels,
        processings: Vec<Processing>,
    }
}
