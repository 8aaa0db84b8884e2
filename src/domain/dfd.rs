use crate::domain::cloneable::{entity, Cloneable};
use crate::domain::data::{refs_for_revision, DataRef, SchemaRevision};
use crate::domain::labels::Labels;

entity! {
    DataType as "DataType", overrides DataTypeOverrides {
        id_: String,
        aggregates: Labels,
        validity: String,
        categories: Labels,
    }
}

entity! {
    ExternalEntity as "ExternalEntity", overrides ExternalEntityOverrides {
        id_: String,
        consumes: Vec<DataRef>,
        produces: Vec<DataRef>,
        location: Labels,
        environment: Labels,
        categories: Labels,
        age: Option<String>,
        produces_public_information: bool,
        safeguards: Labels,
        options: Labels,
    }
}

entity! {
    /// CRUD bindings for one kind of data held by a store. The operation
    /// fields name the data flows that perform them.
    DataStored as "DataStored", overrides DataStoredOverrides {
        type_: DataRef,
        storage_period: String,
        create: String,
        read: String,
        update: String,
        delete: String,
    }
}

entity! {
    DataFlow as "DataFlow", overrides DataFlowOverrides {
        id_: String,
        from_: String,
        to: String,
        data: Vec<DataRef>,
        encryption: String,
        periodicity: String,
        amount_of_data_per_period: u64,
        certification: Labels,
        safeguards: Labels,
    }
}

entity! {
    DataStore as "DataStore", overrides DataStoreOverrides {
        id_: String,
        data_stored: Vec<DataStored>,
        location: Labels,
        environment: Labels,
        certification: Labels,
        safeguards: Labels,
    }
}

entity! {
    Process as "Process", overrides ProcessOverrides {
        id_: String,
        consumes: Vec<DataRef>,
        produces: Vec<DataRef>,
        location: Labels,
        environment: Labels,
        purposes: Labels,
        certification: Labels,
        safeguards: Labels,
    }
}

entity! {
    /// Data Flow Diagram.
    Dfd as "DFD", overrides DfdOverrides {
        data_types: Vec<DataType>,
        external_entities: Vec<ExternalEntity>,
        processes: Vec<Process>,
        data_stores: Vec<DataStore>,
        data_flows: Vec<DataFlow>,
    }
}

/// Rewrites every data reference to the form used by a schema revision.
pub trait Revise {
    fn revise(&self, revision: SchemaRevision) -> Self;
}

impl Revise for ExternalEntity {
    fn revise(&self, revision: SchemaRevision) -> Self {
        self.with_overrides(
            ExternalEntityOverrides::default()
                .consumes(refs_for_revision(&self.consumes, revision))
                .produces(refs_for_revision(&self.produces, revision)),
        )
    }
}

impl Revise for Process {
    fn revise(&self, revision: SchemaRevision) -> Self {
        self.with_overrides(
            ProcessOverrides::default()
                .consumes(refs_for_revision(&self.consumes, revision))
                .produces(refs_for_revision(&self.produces, revision)),
        )
    }
}

impl Revise for DataFlow {
    fn revise(&self, revision: SchemaRevision) -> Self {
        self.with_overrides(DataFlowOverrides::default().data(refs_for_revision(&self.data, revision)))
    }
}

impl Revise for DataStored {
    fn revise(&self, revision: SchemaRevision) -> Self {
        self.with_overrides(DataStoredOverrides::default().type_(self.type_.for_revision(revision)))
    }
}

impl Revise for DataStore {
    fn revise(&self, revision: SchemaRevision) -> Self {
        self.with_overrides(DataStoreOverrides::default().data_stored(revise_all(&self.data_stored, revision)))
    }
}

impl Revise for Dfd {
    fn revise(&self, revision: SchemaRevision) -> Self {
        self.with_overrides(
            DfdOverrides::default()
                .external_entities(revise_all(&self.external_entities, revision))
                .processes(revise_all(&self.processes, revision))
                .data_stores(revise_all(&self.data_stores, revision))
                .data_flows(revise_all(&self.data_flows, revision)),
        )
    }
}

fn revise_all<T: Revise>(items: &[T], revision: SchemaRevision) -> Vec<T> {
    items.iter().map(|item| item.revise(revision)).collect()
}
