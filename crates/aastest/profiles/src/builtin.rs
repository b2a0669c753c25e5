//! Built-in profile table for version 3.0 of the AAS HTTP API.
//!
//! Three tiers: APIs (lists of operation ids), service specifications
//! (lists of APIs) and service-specification profiles (`SSP-NNN`, which
//! either reference a service specification or pick individual operations).

/// Namespace of the service-specification profile URIs.
pub const SSP_PREFIX: &str = "https://admin-shell.io/aas/API/3/0/";

const APIS: &[(&str, &[&str])] = &[
    (
        "Asset Administration Shell API",
        &[
            "GetAssetAdministrationShell",
            "PutAssetAdministrationShell",
            "GetAllSubmodelReferences",
            "PostSubmodelReference",
            "DeleteSubmodelReference",
            "GetAssetInformation",
            "PutAssetInformation",
            "GetThumbnail",
            "PutThumbnail",
            "DeleteThumbnail",
        ],
    ),
    (
        "Submodel API",
        &[
            "GetSubmodel",
            "GetAllSubmodelElements",
            "GetSubmodelElementByPath",
            "GetFileByPath",
            "PutFileByPath",
            "DeleteFileByPath",
            "PutSubmodel",
            "PatchSubmodel",
            "PostSubmodelElement",
            "PostSubmodelElementByPath",
            "PutSubmodelElementByPath",
            "PatchSubmodelElementByPath",
            "GetSubmodelElementValueByPath",
            "DeleteSubmodelElementByPath",
            "InvokeOperationSync",
            "InvokeOperationAsync",
            "GetOperationAsyncStatus",
            "GetOperationAsyncResult",
        ],
    ),
    ("Serialization API", &["GenerateSerializationByIds"]),
    (
        "AASX File Server API",
        &[
            "GetAllAASXPackageIds",
            "GetAASXByPackageId",
            "PostAASXPackage",
            "PutAASXByPackageId",
            "DeleteAASXByPackageId",
        ],
    ),
    (
        "Asset Administration Shell Registry API",
        &[
            "GetAllAssetAdministrationShellDescriptors",
            "GetAssetAdministrationShellDescriptorById",
            "PostAssetAdministrationShellDescriptor",
            "PutAssetAdministrationShellDescriptorById",
            "DeleteAssetAdministrationShellDescriptorById",
        ],
    ),
    (
        "Submodel Registry API",
        &[
            "GetAllSubmodelDescriptors",
            "GetSubmodelDescriptorById",
            "PostSubmodelDescriptor",
            "PutSubmodelDescriptorById",
            "DeleteSubmodelDescriptorById",
        ],
    ),
    (
        "Asset Administration Shell Repository API",
        &[
            "GetAllAssetAdministrationShells",
            "GetAllAssetAdministrationShells-Reference",
            "GetAssetAdministrationShellById",
            "GetAllAssetAdministrationShellsByAssetId",
            "GetAllAssetAdministrationShellsByIdShort",
            "PostAssetAdministrationShell",
            "PutAssetAdministrationShellById",
            "DeleteAssetAdministrationShellById",
            "GetAssetAdministrationShellById-Reference_AasRepository",
        ],
    ),
    (
        "Submodel Repository API",
        &[
            "GetAllSubmodels",
            "GetSubmodelById",
            "GetAllSubmodelsBySemanticId",
            "GetAllSubmodelsByIdShort",
            "PostSubmodel",
            "PutSubmodelById",
            "DeleteSubmodelById",
        ],
    ),
    (
        "Concept Description Repository API",
        &[
            "GetAllConceptDescriptions",
            "GetConceptDescriptionById",
            "GetAllConceptDescriptionsByIdShort",
            "GetAllConceptDescriptionsByIsCaseOf",
            "GetAllConceptDescriptionsByDataSpecificationReference",
            "PostConceptDescription",
            "PutConceptDescriptionById",
            "DeleteConceptDescriptionById",
        ],
    ),
    (
        "Asset Administration Shell Basic Discovery API",
        &[
            "GetAllAssetAdministrationShellIdsByAssetLink",
            "GetAllAssetLinksById",
            "PostAllAssetLinksById",
            "DeleteAllAssetLinksById",
        ],
    ),
    ("Description API", &["GetSelfDescription"]),
];

const SERVICE_SPECIFICATIONS: &[(&str, &[&str])] = &[
    (
        "Asset Administration Shell Service Specification",
        &[
            "Asset Administration Shell API",
            "Submodel API",
            "Serialization API",
            "Description API",
        ],
    ),
    (
        "Submodel Service Specification",
        &["Submodel API", "Serialization API", "Description API"],
    ),
    (
        "AASX File Server Service Specification",
        &["AASX File Server API", "Description API"],
    ),
    (
        "Asset Administration Shell Registry Service Specification",
        &[
            "Asset Administration Shell Registry API",
            "Submodel Registry API",
            "Description API",
        ],
    ),
    (
        "Submodel Registry Service Specification",
        &["Submodel Registry API", "Description API"],
    ),
    (
        "Discovery Service Specification",
        &[
            "Asset Administration Shell Basic Discovery API",
            "Description API",
        ],
    ),
    (
        "Asset Administration Shell Repository Service Specification",
        &[
            "Asset Administration Shell API",
            "Submodel API",
            "Asset Administration Shell Repository API",
            "Submodel Repository API",
            "Serialization API",
            "Description API",
        ],
    ),
    (
        "Submodel Repository Service Specification",
        &[
            "Submodel API",
            "Submodel Repository API",
            "Serialization API",
            "Description API",
        ],
    ),
    (
        "ConceptDescription Repository Service Specification",
        &[
            "Serialization API",
            "Description API",
            "Concept Description Repository API",
        ],
    ),
];

// Short names; the registry expands them with SSP_PREFIX.
const SERVICE_SPECIFICATION_PROFILES: &[(&str, &[&str])] = &[
    (
        "AssetAdministrationShellServiceSpecification/SSP-001",
        &["Asset Administration Shell Service Specification"],
    ),
    (
        "AssetAdministrationShellServiceSpecification/SSP-002",
        &[
            "GetAssetAdministrationShell",
            "GetAllSubmodelReferences",
            "GetAssetInformation",
            "GetThumbnail",
            "GetSubmodel",
            "GetAllSubmodelElements",
            "GetSubmodelElementByPath",
            "GetFileByPath",
        ],
    ),
    (
        "SubmodelServiceSpecification/SSP-001",
        &["Submodel Service Specification"],
    ),
    (
        "SubmodelServiceSpecification/SSP-002",
        &[
            "GetSubmodel",
            "GetAllSubmodelElements",
            "GetSubmodelElementByPath",
            "GetFileByPath",
            "GenerateSerializationByIds",
            "GetSelfDescription",
        ],
    ),
    (
        "SubmodelServiceSpecification/SSP-003",
        &["GetSubmodel", "InvokeOperationSync", "GetSelfDescription"],
    ),
    (
        "AasxFileServerServiceSpecification/SSP-001",
        &["AASX File Server Service Specification"],
    ),
    (
        "AssetAdministrationShellRegistryServiceSpecification/SSP-001",
        &["Asset Administration Shell Registry Service Specification"],
    ),
    (
        "AssetAdministrationShellRegistryServiceSpecification/SSP-002",
        &[
            "GetAllAssetAdministrationShellDescriptors",
            "GetAssetAdministrationShellDescriptorById",
            "GetAllSubmodelDescriptors",
            "GetSubmodelDescriptorById",
        ],
    ),
    (
        "SubmodelRegistryServiceSpecification/SSP-001",
        &["Submodel Registry Service Specification"],
    ),
    (
        "SubmodelRegistryServiceSpecification/SSP-002",
        &[
            "GetAllSubmodelDescriptors",
            "GetSubmodelDescriptorById",
            "GetSelfDescription",
        ],
    ),
    (
        "DiscoveryServiceSpecification/SSP-001",
        &["Discovery Service Specification"],
    ),
    (
        "AssetAdministrationShellRepositoryServiceSpecification/SSP-001",
        &["Asset Administration Shell Repository Service Specification"],
    ),
    (
        "AssetAdministrationShellRepositoryServiceSpecification/SSP-002",
        &[
            // AAS Repository API
            "GetAllAssetAdministrationShells",
            "GetAllAssetAdministrationShells-Reference",
            "GetAssetAdministrationShellById",
            "GetAssetAdministrationShellById-Reference_AasRepository",
            // AAS API by superpath
            "GetAllSubmodelReferences_AasRepository",
            "GetAssetInformation_AasRepository",
            "GetThumbnail_AasRepository",
            // Submodel Repository API by superpath
            "GetSubmodelById_AasRepository",
            "GetSubmodelById-Metadata_AasRepository",
            "GetSubmodelById-ValueOnly_AasRepository",
            "GetSubmodelById-Reference_AasRepository",
            "GetSubmodelById-Path_AasRepository",
            // Submodel API by superpath
            "GetAllSubmodelElements_AasRepository",
            "GetAllSubmodelElements-Metadata_AasRepository",
            "GetAllSubmodelElements-ValueOnly_AasRepository",
            "GetAllSubmodelElements-Reference_AasRepository",
            "GetAllSubmodelElements-Path_AasRepository",
            "GetSubmodelElementByPath_AasRepository",
            "GetSubmodelElementByPath-Metadata_AasRepository",
            "GetSubmodelElementByPath-ValueOnly_AasRepository",
            "GetSubmodelElementByPath-Reference_AasRepository",
            "GetSubmodelElementByPath-Path_AasRepository",
            "GetFileByPath_AasRepository",
            "GenerateSerializationByIds",
            "GetSelfDescription",
        ],
    ),
    (
        "SubmodelRepositoryServiceSpecification/SSP-001",
        &["Submodel Repository Service Specification"],
    ),
    (
        "SubmodelRepositoryServiceSpecification/SSP-002",
        &[
            "GetAllSubmodels",
            "GetSubmodelById",
            "GetAllSubmodelsBySemanticId",
            "GetAllSubmodelsByIdShort",
            "GetSubmodel",
            "GetAllSubmodelElements",
            "GetSubmodelElementByPath",
            "GetFileByPath",
            "GenerateSerializationByIds",
            "GetSelfDescription",
        ],
    ),
    // TODO: SSP-003/004 additionally require constraints AASa-003/AASa-004,
    // which are payload rules and not checked here.
    (
        "SubmodelRepositoryServiceSpecification/SSP-003",
        &["SubmodelRepositoryServiceSpecification/SSP-001"],
    ),
    (
        "SubmodelRepositoryServiceSpecification/SSP-004",
        &["SubmodelRepositoryServiceSpecification/SSP-002"],
    ),
    (
        "ConceptDescriptionRepositoryServiceSpecification/SSP-001",
        &["ConceptDescription Repository Service Specification"],
    ),
];

/// All entries of the v3.0 table, in declaration order.
pub fn aas_v3_0() -> Vec<(&'static str, Vec<&'static str>)> {
    APIS.iter()
        .chain(SERVICE_SPECIFICATIONS)
        .chain(SERVICE_SPECIFICATION_PROFILES)
        .map(|(name, members)| (*name, members.to_vec()))
        .collect()
}
