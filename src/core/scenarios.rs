//! Scenario catalog.
//!
//! [`Baseline`] is a minimal compliant system: one user sending messages
//! through a single process into a message store. Every scenario is a pure
//! function of the baseline that derives its variant through
//! [`Cloneable::with_overrides`], so scenarios never see each other's changes.

use crate::domain::cloneable::Cloneable;
use crate::domain::data::{data_refs, DataRef};
use crate::domain::dfd::{
    DataFlow, DataFlowOverrides, DataStore, DataStoreOverrides, DataStored, DataType,
    DataTypeOverrides, Dfd, DfdOverrides, ExternalEntity, ExternalEntityOverrides, Process,
};
use crate::domain::dpia::{
    Dpia, DpiaOverrides, Dpo, PersonalDatum, PersonalDatumOverrides, Processing,
    ProcessingOverrides, Purpose, Risk, SupervisoryAuthorityVeredict,
    SupervisoryAuthorityVeredictOverrides,
};
use crate::domain::labels::Labels;
use crate::domain::model::{CustomScenario, Scenario};
use crate::utils::error::{FixtureError, Result};

pub type ScenarioFn = fn(&Baseline) -> Scenario;

/// Scenario every custom scenario derives from unless it names another.
pub const DEFAULT_BASE: &str = "a";

static BUILTIN: [(&str, ScenarioFn); 5] = [
    ("a", compliant),
    ("asvs_browser", asvs_browser),
    ("dpia_con", dpia_con),
    ("gdpr_con", gdpr_con),
    ("missing_consent", missing_consent),
];

pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(name, _)| *name)
}

pub fn find_builtin(name: &str) -> Option<ScenarioFn> {
    BUILTIN
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, build)| *build)
}

/// The entities scenarios start from, kept by name so variants can target
/// them directly.
#[derive(Debug, Clone)]
pub struct Baseline {
    pub message_type: DataType,
    pub account_id_type: DataType,
    pub account_type: DataType,
    pub user: ExternalEntity,
    pub external_system: ExternalEntity,
    pub send_message: Process,
    pub message_db: DataStore,
    pub message_flow: DataFlow,
    pub store_flow: DataFlow,
    pub message_datum: PersonalDatum,
    pub account_id_datum: PersonalDatum,
    pub account_datum: PersonalDatum,
    pub risk: Risk,
    pub routing: Purpose,
    pub processing: Processing,
    pub dfd: Dfd,
    pub dpia: Dpia,
}

impl Baseline {
    pub fn new() -> Self {
        let message_type = DataType {
            id_: "message".into(),
            aggregates: Labels::new(),
            validity: "eternal".into(),
            categories: ["dpia:confidential", "dpia:personal"].into(),
        };
        let account_id_type = DataType {
            id_: "AccountId".into(),
            aggregates: [":AccountId"].into(),
            validity: "eternal".into(),
            categories: ["dpia:personal"].into(),
        };
        let account_type = DataType {
            id_: "Account".into(),
            aggregates: [":AccountId"].into(),
            validity: "eternal".into(),
            categories: ["dpia:confidential", "dpia:personal"].into(),
        };

        let user = ExternalEntity {
            id_: "dpia:User".into(),
            consumes: data_refs([":message"]),
            produces: data_refs([":message"]),
            location: ["Portugal"].into(),
            environment: Labels::new(),
            categories: ["dpia:human"].into(),
            age: Some(">16".into()),
            produces_public_information: false,
            safeguards: Labels::new(),
            options: Labels::new(),
        };
        let external_system = user.with_overrides(
            ExternalEntityOverrides::default()
                .categories(["dpia:external system"])
                .age(None::<String>),
        );

        let send_message = Process {
            id_: "send message".into(),
            consumes: data_refs([":message"]),
            produces: data_refs([":message"]),
            location: ["Portugal"].into(),
            environment: Labels::new(),
            purposes: ["dpia:message routing"].into(),
            certification: Labels::new(),
            safeguards: Labels::new(),
        };

        let message_db = DataStore {
            id_: "message db".into(),
            data_stored: vec![DataStored {
                type_: DataRef::data(":message"),
                storage_period: "eternal".into(),
                create: ":C store message".into(),
                read: ":R store message".into(),
                update: ":U store message".into(),
                delete: ":D store message".into(),
            }],
            location: ["Portugal"].into(),
            environment: Labels::new(),
            certification: Labels::new(),
            safeguards: Labels::new(),
        };

        let message_flow = DataFlow {
            id_: "C message".into(),
            from_: "dpia:User".into(),
            to: ":send message".into(),
            data: data_refs([":message"]),
            encryption: "signal".into(),
            periodicity: "1m".into(),
            amount_of_data_per_period: 1,
            certification: Labels::new(),
            safeguards: Labels::new(),
        };
        let store_flow = message_flow.with_overrides(
            DataFlowOverrides::default()
                .id_("C store message")
                .from_(":send message")
                .to(":message db"),
        );

        let mut data_flows = crud_flows(&message_flow, "message");
        data_flows.extend(crud_flows(&store_flow, "store message"));

        let dfd = Dfd {
            data_types: vec![message_type.clone(), account_id_type.clone(), account_type.clone()],
            external_entities: vec![user.clone(), external_system.clone()],
            processes: vec![send_message.clone()],
            data_stores: vec![message_db.clone()],
            data_flows,
        };

        let message_datum = PersonalDatum {
            id_: "dfd:message".into(),
            kind: ":personal".into(),
            required_by_law: Labels::new(),
            necessary_to_enter_contract: Labels::new(),
            destinataries: [":User"].into(),
            retention_period: "2d".into(),
            abides_by_code_of_conduct: false,
            purposes: [":message routing"].into(),
            transfers_to_third_parties: Labels::new(),
        };
        let account_id_datum = message_datum.with_overrides(
            PersonalDatumOverrides::default()
                .id_("dfd:AccountId")
                .purposes(Labels::new()),
        );
        let account_datum =
            account_id_datum.with_overrides(PersonalDatumOverrides::default().id_("dfd:Account"));

        let risk = Risk {
            id_: "Risk 1".into(),
            impact: 0,
            likelyhood: 1,
            accepted_mitigations: Labels::new(),
        };

        let routing = Purpose {
            id_: ":message routing".into(),
            adequate: true,
            relevant: true,
            limited: true,
        };

        let processing = Processing {
            id_: "dfd:send message".into(),
            automated_decisions: true,
            explicit: true,
            fair: true,
            is_official_authority: false,
            large_scale_processing: false,
            lawful: true,
            legal_impact_for_the_user: true,
            legally_mandated: false,
            legitimate: true,
            legitimate_interest: [":User"].into(),
            professional_secrecy: false,
            public_interest: false,
            purposes: vec![routing.clone()],
            required_for_contract: Labels::new(),
            requires_new_technologies: false,
            risk_to_rights_and_freedoms_of: [":User"].into(),
            risks: Labels::from(vec![format!(":{}", risk.id_)]),
            scores_users: true,
            specific: true,
            supervisory_authority_veredict: SupervisoryAuthorityVeredict {
                contact: [":Supervisor"].into(),
                allowed: true,
            },
            systematic_monitoring: true,
            transparent: true,
            vital_interest: Labels::new(),
        };

        let dpia = Dpia {
            last_update: ":last update".into(),
            responsible: [":Someone", ":Else"].into(),
            dpo: vec![
                Dpo {
                    name: ":The".into(),
                    contact: "the@email.com".into(),
                },
                Dpo {
                    name: ":Man".into(),
                    contact: "manemail.com".into(),
                },
            ],
            personal_data: vec![
                message_datum.clone(),
                account_id_datum.clone(),
                account_datum.clone(),
            ],
            risks: vec![risk.clone()],
            personal_data_processing_whitelist: [":message routing"].into(),
            personal_data_processing_that_requires_dpia: Labels::new(),
            processings: vec![processing.clone()],
        };

        Self {
            message_type,
            account_id_type,
            account_type,
            user,
            external_system,
            send_message,
            message_db,
            message_flow,
            store_flow,
            message_datum,
            account_id_datum,
            account_datum,
            risk,
            routing,
            processing,
            dfd,
            dpia,
        }
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::new()
    }
}

/// Create, read, update and delete variants of `flow`, ids `"<op> <subject>"`.
fn crud_flows(flow: &DataFlow, subject: &str) -> Vec<DataFlow> {
    ["C", "R", "U", "D"]
        .iter()
        .map(|op| flow.with_overrides(DataFlowOverrides::default().id_(format!("{} {}", op, subject))))
        .collect()
}

fn prepend<T: Clone>(first: T, rest: &[T]) -> Vec<T> {
    std::iter::once(first).chain(rest.iter().cloned()).collect()
}

/// The baseline as-is.
pub fn compliant(b: &Baseline) -> Scenario {
    Scenario::new(
        "a",
        b.dfd.with_overrides(DfdOverrides::default()),
        b.dpia.with_overrides(DpiaOverrides::default()),
    )
}

/// Message data flagged as sensitive and stored client side.
pub fn asvs_browser(b: &Baseline) -> Scenario {
    let message_type = b.message_type.with_overrides(DataTypeOverrides::default().categories([
        "dpia:confidential",
        "dpia:personal",
        "dpia:authenticated only",
        "dpia:sensitive",
    ]));
    let browser_db = b
        .message_db
        .with_overrides(DataStoreOverrides::default().environment(["browser"]));

    let dfd = b.dfd.with_overrides(
        DfdOverrides::default()
            .data_types(vec![message_type, b.account_id_type.clone(), b.account_type.clone()])
            .data_stores(vec![browser_db]),
    );

    Scenario::new("asvs_browser", dfd, b.dpia.with_overrides(DpiaOverrides::default()))
}

/// DPIA inconsistent with the DFD: unknown destinataries, purposes, risks and
/// dates.
pub fn dpia_con(b: &Baseline) -> Scenario {
    let message_datum = b.message_datum.with_overrides(
        PersonalDatumOverrides::default()
            .destinataries(
                b.message_datum
                    .destinataries
                    .prepended([":dont exist", ":external system"]),
            )
            .retention_period("wrong"),
    );
    let new_type = DataType {
        id_: "new data type".into(),
        aggregates: Labels::new(),
        validity: "1m".into(),
        categories: ["dpia:personal"].into(),
    };
    let new_process = Process {
        id_: "new proc".into(),
        consumes: vec![],
        produces: vec![],
        location: Labels::new(),
        environment: Labels::new(),
        purposes: ["new purpose 1"].into(),
        certification: Labels::new(),
        safeguards: Labels::new(),
    };
    let processing = b
        .processing
        .with_overrides(ProcessingOverrides::default().risks(["new risk"]));

    let dfd = b.dfd.with_overrides(
        DfdOverrides::default()
            .data_types(prepend(new_type, &b.dfd.data_types))
            .processes(prepend(new_process, &b.dfd.processes)),
    );
    let dpia = b.dpia.with_overrides(
        DpiaOverrides::default()
            .personal_data(vec![
                message_datum,
                b.account_id_datum.clone(),
                b.account_datum.clone(),
            ])
            .personal_data_processing_whitelist(["new purpose 2"])
            .personal_data_processing_that_requires_dpia(["new purpose 3"])
            .processings(vec![processing])
            .last_update("wrong date"),
    );

    Scenario::new("dpia_con", dfd, dpia)
}

/// DFD with dangling references and invalid values, DPIA with interests held
/// by unknown parties.
pub fn gdpr_con(b: &Baseline) -> Scenario {
    let new_db = DataStore {
        id_: "new db".into(),
        data_stored: vec![DataStored {
            type_: DataRef::data(":type 3"),
            storage_period: "eternal".into(),
            create: ":C new".into(),
            read: ":R new".into(),
            update: ":U new".into(),
            delete: ":D new".into(),
        }],
        location: ["Portugal"].into(),
        environment: Labels::new(),
        certification: Labels::new(),
        safeguards: Labels::new(),
    };
    let new_entity = b.user.with_overrides(
        ExternalEntityOverrides::default()
            .id_("new ent")
            .consumes(data_refs([":type 1"]))
            .produces(data_refs([":type 2"])),
    );
    let dangling_flow = b.message_flow.with_overrides(
        DataFlowOverrides::default()
            .from_(":message")
            .to(":no exists")
            .data(prepend(DataRef::data(":type 4"), &b.message_flow.data))
            .periodicity("invalid"),
    );
    let invalid_type = b.message_type.with_overrides(
        DataTypeOverrides::default()
            .aggregates(b.message_type.aggregates.prepended([":type 5"]))
            .validity("invalid"),
    );
    let processing = b.processing.with_overrides(
        ProcessingOverrides::default()
            .legitimate_interest([":human", ":User", ":new one"])
            .vital_interest([":human", ":User", ":another one"]),
    );

    let dfd = b.dfd.with_overrides(
        DfdOverrides::default()
            .external_entities(prepend(new_entity, &b.dfd.external_entities))
            .data_stores(prepend(new_db, &b.dfd.data_stores))
            .data_flows(prepend(dangling_flow, &b.dfd.data_flows))
            .data_types(prepend(invalid_type, &b.dfd.data_types)),
    );
    let dpia = b
        .dpia
        .with_overrides(DpiaOverrides::default().processings(vec![processing]));

    Scenario::new("gdpr_con", dfd, dpia)
}

/// Processing without explicit, specific consent and rejected by the
/// supervisory authority.
pub fn missing_consent(b: &Baseline) -> Scenario {
    let veredict = b.processing.supervisory_authority_veredict.with_overrides(
        SupervisoryAuthorityVeredictOverrides::default().allowed(false),
    );
    let processing = b.processing.with_overrides(
        ProcessingOverrides::default()
            .explicit(false)
            .specific(false)
            .legitimate_interest(Labels::new())
            .supervisory_authority_veredict(veredict),
    );

    Scenario::new(
        "missing_consent",
        b.dfd.with_overrides(DfdOverrides::default()),
        b.dpia
            .with_overrides(DpiaOverrides::default().processings(vec![processing])),
    )
}

/// Applies the attribute overrides of a configured scenario to the DFD and
/// DPIA of its base scenario.
pub fn custom(b: &Baseline, spec: &CustomScenario) -> Result<Scenario> {
    let base_name = spec.base.as_deref().unwrap_or(DEFAULT_BASE);
    let build = find_builtin(base_name).ok_or_else(|| FixtureError::UnknownScenario {
        name: base_name.to_string(),
    })?;
    let base = build(b);

    let dfd = base.dfd.clone_with(&spec.dfd)?;
    let dpia = base.dpia.clone_with(&spec.dpia)?;

    Ok(Scenario::new(spec.name.clone(), dfd, dpia))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cloneable::AttributeOverrides;
    use serde_json::json;

    #[test]
    fn test_baseline_shape() {
        let b = Baseline::new();
        assert_eq!(b.dfd.data_types.len(), 3);
        assert_eq!(b.dfd.data_flows.len(), 8);
        assert_eq!(b.dfd.data_flows[1].id_, "R message");
        assert_eq!(b.dfd.data_flows[4].id_, "C store message");
        assert_eq!(b.dfd.data_flows[7].id_, "D store message");
        assert_eq!(b.dfd.data_flows[7].to, ":message db");
        assert_eq!(b.external_system.age, None);
        assert_eq!(b.account_datum.id_, "dfd:Account");
        assert_eq!(b.processing.risks, Labels::from([":Risk 1"]));
    }

    #[test]
    fn test_every_builtin_keeps_its_name() {
        let b = Baseline::new();
        for name in builtin_names() {
            let build = find_builtin(name).unwrap();
            assert_eq!(build(&b).name, name);
        }
        assert!(find_builtin("nope").is_none());
    }

    #[test]
    fn test_compliant_equals_baseline() {
        let b = Baseline::new();
        let scenario = compliant(&b);
        assert_eq!(scenario.dfd, b.dfd);
        assert_eq!(scenario.dpia, b.dpia);
    }

    #[test]
    fn test_scenarios_do_not_touch_baseline() {
        let b = Baseline::new();
        let before = b.clone();

        let gdpr = gdpr_con(&b);
        let dpia = dpia_con(&b);

        assert_eq!(b.dfd, before.dfd);
        assert_eq!(b.dpia, before.dpia);
        assert_eq!(gdpr.dfd.data_flows.len(), 9);
        assert_eq!(gdpr.dfd.data_flows[0].to, ":no exists");
        assert_eq!(dpia.dfd.data_flows.len(), 8);
        assert_eq!(dpia.dpia.last_update, "wrong date");
        assert_eq!(gdpr.dpia.last_update, ":last update");
    }

    #[test]
    fn test_asvs_browser_widens_categories() {
        let b = Baseline::new();
        let scenario = asvs_browser(&b);

        assert!(scenario.dfd.data_types[0].categories.contains("dpia:sensitive"));
        assert!(!b.message_type.categories.contains("dpia:sensitive"));
        assert_eq!(scenario.dfd.data_stores.len(), 1);
        assert_eq!(scenario.dfd.data_stores[0].environment, Labels::from(["browser"]));
    }

    #[test]
    fn test_missing_consent_relaxes_processing() {
        let b = Baseline::new();
        let scenario = missing_consent(&b);
        let processing = &scenario.dpia.processings[0];

        assert!(!processing.explicit);
        assert!(!processing.specific);
        assert!(!processing.supervisory_authority_veredict.allowed);
        assert!(b.processing.supervisory_authority_veredict.allowed);
        assert_eq!(processing.purposes, b.processing.purposes);
    }

    #[test]
    fn test_custom_scenario() {
        let b = Baseline::new();
        let mut dpia = AttributeOverrides::new();
        dpia.insert("last_update".into(), json!("2024-01-01"));
        let spec = CustomScenario {
            name: "dated".into(),
            base: Some("gdpr_con".into()),
            file_prefix: None,
            dfd: AttributeOverrides::new(),
            dpia,
        };

        let scenario = custom(&b, &spec).unwrap();
        assert_eq!(scenario.name, "dated");
        assert_eq!(scenario.dpia.last_update, "2024-01-01");
        assert_eq!(scenario.dfd, gdpr_con(&b).dfd);
    }

    #[test]
    fn test_custom_scenario_errors() {
        let b = Baseline::new();
        let mut dfd = AttributeOverrides::new();
        dfd.insert("flows".into(), json!([]));
        let spec = CustomScenario {
            name: "broken".into(),
            base: None,
            file_prefix: None,
            dfd,
            dpia: AttributeOverrides::new(),
        };
        assert!(matches!(
            custom(&b, &spec),
            Err(FixtureError::UnknownAttribute { .. })
        ));

        let spec = CustomScenario {
            name: "orphan".into(),
            base: Some("missing".into()),
            ..Default::default()
        };
        assert!(matches!(
            custom(&b, &spec),
            Err(FixtureError::UnknownScenario { .. })
        ));
    }
}
