//! Operation table of the AAS HTTP API, version 3.0.

use crate::operation::{Method, Operation, ParamKind, Parameter};

const SHELL: &str = "/shells/{aasIdentifier}";
const SUBMODEL_SUPERPATH: &str = "/shells/{aasIdentifier}/submodels/{submodelIdentifier}";
const ELEMENT: &str = "/submodel-elements/{idShortPath}";

fn op(id: &str, method: Method, path: &str, parameters: Vec<Parameter>) -> Operation {
    Operation::new(id, method, path).with_parameters(parameters)
}

fn id(name: &str) -> Parameter {
    Parameter::path(name, ParamKind::Identifier)
}

fn aas_id() -> Parameter {
    id("aasIdentifier")
}

fn submodel_id() -> Parameter {
    id("submodelIdentifier")
}

fn id_short_path() -> Parameter {
    Parameter::path("idShortPath", ParamKind::IdShortPath)
}

fn limit() -> Parameter {
    Parameter::query("limit", ParamKind::Limit)
}

fn cursor() -> Parameter {
    Parameter::query("cursor", ParamKind::Cursor)
}

fn level() -> Parameter {
    Parameter::query("level", ParamKind::Level)
}

fn extent() -> Parameter {
    Parameter::query("extent", ParamKind::Extent)
}

fn id_short() -> Parameter {
    Parameter::query("idShort", ParamKind::IdShort)
}

fn ids(name: &str) -> Parameter {
    Parameter::query(name, ParamKind::IdentifierList)
}

fn encoded(name: &str) -> Parameter {
    Parameter::query(name, ParamKind::Identifier)
}

fn body() -> Parameter {
    Parameter::body()
}

/// `prefix` parameters followed by `rest`.
fn under(prefix: &[Parameter], rest: Vec<Parameter>) -> Vec<Parameter> {
    prefix.iter().cloned().chain(rest).collect()
}

fn aas_repository() -> Vec<Operation> {
    use Method::*;
    vec![
        op(
            "GetAllAssetAdministrationShells",
            Get,
            "/shells",
            vec![ids("assetIds"), id_short(), limit(), cursor()],
        ),
        op(
            "GetAllAssetAdministrationShells-Reference",
            Get,
            "/shells/$reference",
            vec![ids("assetIds"), id_short(), limit(), cursor()],
        ),
        op(
            "GetAllAssetAdministrationShellsByAssetId",
            Get,
            "/shells",
            vec![ids("assetIds").required(), limit(), cursor()],
        ),
        op(
            "GetAllAssetAdministrationShellsByIdShort",
            Get,
            "/shells",
            vec![id_short().required(), limit(), cursor()],
        ),
        op("PostAssetAdministrationShell", Post, "/shells", vec![body()]),
        op("GetAssetAdministrationShellById", Get, SHELL, vec![aas_id()]),
        op(
            "GetAssetAdministrationShellById-Reference_AasRepository",
            Get,
            "/shells/{aasIdentifier}/$reference",
            vec![aas_id()],
        ),
        op(
            "PutAssetAdministrationShellById",
            Put,
            SHELL,
            vec![aas_id(), body()],
        ),
        op(
            "DeleteAssetAdministrationShellById",
            Delete,
            SHELL,
            vec![aas_id()],
        ),
    ]
}

fn aas_superpath() -> Vec<Operation> {
    use Method::*;
    let shell = [aas_id()];
    vec![
        op(
            "GetAllSubmodelReferences_AasRepository",
            Get,
            "/shells/{aasIdentifier}/submodel-refs",
            under(&shell, vec![limit(), cursor()]),
        ),
        op(
            "GetAssetInformation_AasRepository",
            Get,
            "/shells/{aasIdentifier}/asset-information",
            under(&shell, vec![]),
        ),
        op(
            "GetThumbnail_AasRepository",
            Get,
            "/shells/{aasIdentifier}/asset-information/thumbnail",
            under(&shell, vec![]),
        ),
    ]
}

fn submodel_superpath() -> Vec<Operation> {
    use Method::*;
    let sm = [aas_id(), submodel_id()];
    let elem = [aas_id(), submodel_id(), id_short_path()];
    let p = |suffix: &str| format!("{SUBMODEL_SUPERPATH}{suffix}");
    vec![
        op(
            "GetSubmodelById_AasRepository",
            Get,
            SUBMODEL_SUPERPATH,
            under(&sm, vec![level(), extent()]),
        ),
        op(
            "GetSubmodelById-Metadata_AasRepository",
            Get,
            &p("/$metadata"),
            under(&sm, vec![]),
        ),
        op(
            "GetSubmodelById-ValueOnly_AasRepository",
            Get,
            &p("/$value"),
            under(&sm, vec![level(), extent()]),
        ),
        op(
            "GetSubmodelById-Reference_AasRepository",
            Get,
            &p("/$reference"),
            under(&sm, vec![]),
        ),
        op(
            "GetSubmodelById-Path_AasRepository",
            Get,
            &p("/$path"),
            under(&sm, vec![level()]),
        ),
        op(
            "GetAllSubmodelElements_AasRepository",
            Get,
            &p("/submodel-elements"),
            under(&sm, vec![limit(), cursor(), level(), extent()]),
        ),
        op(
            "GetAllSubmodelElements-Metadata_AasRepository",
            Get,
            &p("/submodel-elements/$metadata"),
            under(&sm, vec![limit(), cursor()]),
        ),
        op(
            "GetAllSubmodelElements-ValueOnly_AasRepository",
            Get,
            &p("/submodel-elements/$value"),
            under(&sm, vec![limit(), cursor(), level(), extent()]),
        ),
        op(
            "GetAllSubmodelElements-Reference_AasRepository",
            Get,
            &p("/submodel-elements/$reference"),
            under(&sm, vec![limit(), cursor()]),
        ),
        op(
            "GetAllSubmodelElements-Path_AasRepository",
            Get,
            &p("/submodel-elements/$path"),
            under(&sm, vec![limit(), cursor(), level()]),
        ),
        op(
            "GetSubmodelElementByPath_AasRepository",
            Get,
            &p(ELEMENT),
            under(&elem, vec![level(), extent()]),
        ),
        op(
            "GetSubmodelElementByPath-Metadata_AasRepository",
            Get,
            &p(&format!("{ELEMENT}/$metadata")),
            under(&elem, vec![]),
        ),
        op(
            "GetSubmodelElementByPath-ValueOnly_AasRepository",
            Get,
            &p(&format!("{ELEMENT}/$value")),
            under(&elem, vec![level(), extent()]),
        ),
        op(
            "GetSubmodelElementByPath-Reference_AasRepository",
            Get,
            &p(&format!("{ELEMENT}/$reference")),
            under(&elem, vec![]),
        ),
        op(
            "GetSubmodelElementByPath-Path_AasRepository",
            Get,
            &p(&format!("{ELEMENT}/$path")),
            under(&elem, vec![level()]),
        ),
        op(
            "GetFileByPath_AasRepository",
            Get,
            &p(&format!("{ELEMENT}/attachment")),
            under(&elem, vec![]),
        ),
    ]
}

fn aas_interface() -> Vec<Operation> {
    use Method::*;
    vec![
        op("GetAssetAdministrationShell", Get, "/aas", vec![]),
        op("PutAssetAdministrationShell", Put, "/aas", vec![body()]),
        op(
            "GetAllSubmodelReferences",
            Get,
            "/aas/submodel-refs",
            vec![limit(), cursor()],
        ),
        op(
            "PostSubmodelReference",
            Post,
            "/aas/submodel-refs",
            vec![body()],
        ),
        op(
            "DeleteSubmodelReference",
            Delete,
            "/aas/submodel-refs/{submodelIdentifier}",
            vec![submodel_id()],
        ),
        op("GetAssetInformation", Get, "/aas/asset-information", vec![]),
        op(
            "PutAssetInformation",
            Put,
            "/aas/asset-information",
            vec![body()],
        ),
        op(
            "GetThumbnail",
            Get,
            "/aas/asset-information/thumbnail",
            vec![],
        ),
        op(
            "PutThumbnail",
            Put,
            "/aas/asset-information/thumbnail",
            vec![body()],
        ),
        op(
            "DeleteThumbnail",
            Delete,
            "/aas/asset-information/thumbnail",
            vec![],
        ),
    ]
}

fn submodel_interface() -> Vec<Operation> {
    use Method::*;
    let elem = |suffix: &str| format!("/submodel{ELEMENT}{suffix}");
    let path = || vec![id_short_path()];
    let handle = || Parameter::path("handleId", ParamKind::Text);
    vec![
        op("GetSubmodel", Get, "/submodel", vec![level(), extent()]),
        op("PutSubmodel", Put, "/submodel", vec![body(), level()]),
        op("PatchSubmodel", Patch, "/submodel", vec![body(), level()]),
        op(
            "GetAllSubmodelElements",
            Get,
            "/submodel/submodel-elements",
            vec![limit(), cursor(), level(), extent()],
        ),
        op(
            "PostSubmodelElement",
            Post,
            "/submodel/submodel-elements",
            vec![body()],
        ),
        op(
            "GetSubmodelElementByPath",
            Get,
            &elem(""),
            under(&path(), vec![level(), extent()]),
        ),
        op(
            "PostSubmodelElementByPath",
            Post,
            &elem(""),
            under(&path(), vec![body()]),
        ),
        op(
            "PutSubmodelElementByPath",
            Put,
            &elem(""),
            under(&path(), vec![body(), level()]),
        ),
        op(
            "PatchSubmodelElementByPath",
            Patch,
            &elem(""),
            under(&path(), vec![body(), level()]),
        ),
        op(
            "DeleteSubmodelElementByPath",
            Delete,
            &elem(""),
            path(),
        ),
        op(
            "GetSubmodelElementValueByPath",
            Get,
            &elem("/$value"),
            under(&path(), vec![level(), extent()]),
        ),
        op("GetFileByPath", Get, &elem("/attachment"), path()),
        op(
            "PutFileByPath",
            Put,
            &elem("/attachment"),
            under(&path(), vec![body()]),
        ),
        op("DeleteFileByPath", Delete, &elem("/attachment"), path()),
        op(
            "InvokeOperationSync",
            Post,
            &elem("/invoke"),
            under(&path(), vec![body()]),
        ),
        op(
            "InvokeOperationAsync",
            Post,
            &elem("/invoke-async"),
            under(&path(), vec![body()]),
        ),
        op(
            "GetOperationAsyncStatus",
            Get,
            &elem("/operation-status/{handleId}"),
            under(&path(), vec![handle()]),
        ),
        op(
            "GetOperationAsyncResult",
            Get,
            &elem("/operation-results/{handleId}"),
            under(&path(), vec![handle()]),
        ),
    ]
}

fn submodel_repository() -> Vec<Operation> {
    use Method::*;
    let one = "/submodels/{submodelIdentifier}";
    vec![
        op(
            "GetAllSubmodels",
            Get,
            "/submodels",
            vec![
                encoded("semanticId"),
                id_short(),
                limit(),
                cursor(),
                level(),
                extent(),
            ],
        ),
        op(
            "GetAllSubmodelsBySemanticId",
            Get,
            "/submodels",
            vec![encoded("semanticId").required(), limit(), cursor()],
        ),
        op(
            "GetAllSubmodelsByIdShort",
            Get,
            "/submodels",
            vec![id_short().required(), limit(), cursor()],
        ),
        op("PostSubmodel", Post, "/submodels", vec![body()]),
        op(
            "GetSubmodelById",
            Get,
            one,
            vec![submodel_id(), level(), extent()],
        ),
        op("PutSubmodelById", Put, one, vec![submodel_id(), body()]),
        op("DeleteSubmodelById", Delete, one, vec![submodel_id()]),
    ]
}

fn serialization() -> Vec<Operation> {
    vec![op(
        "GenerateSerializationByIds",
        Method::Get,
        "/serialization",
        vec![
            ids("aasIds"),
            ids("submodelIds"),
            Parameter::query("includeConceptDescriptions", ParamKind::Flag),
        ],
    )]
}

fn aasx_file_server() -> Vec<Operation> {
    use Method::*;
    let one = "/packages/{packageId}";
    let package = || id("packageId");
    vec![
        op(
            "GetAllAASXPackageIds",
            Get,
            "/packages",
            vec![encoded("aasId"), limit(), cursor()],
        ),
        op("PostAASXPackage", Post, "/packages", vec![body()]),
        op("GetAASXByPackageId", Get, one, vec![package()]),
        op("PutAASXByPackageId", Put, one, vec![package(), body()]),
        op("DeleteAASXByPackageId", Delete, one, vec![package()]),
    ]
}

fn registries() -> Vec<Operation> {
    use Method::*;
    let shell = "/shell-descriptors/{aasIdentifier}";
    let submodel = "/submodel-descriptors/{submodelIdentifier}";
    vec![
        op(
            "GetAllAssetAdministrationShellDescriptors",
            Get,
            "/shell-descriptors",
            vec![
                limit(),
                cursor(),
                Parameter::query("assetKind", ParamKind::Text),
                Parameter::query("assetType", ParamKind::Identifier),
            ],
        ),
        op(
            "PostAssetAdministrationShellDescriptor",
            Post,
            "/shell-descriptors",
            vec![body()],
        ),
        op(
            "GetAssetAdministrationShellDescriptorById",
            Get,
            shell,
            vec![aas_id()],
        ),
        op(
            "PutAssetAdministrationShellDescriptorById",
            Put,
            shell,
            vec![aas_id(), body()],
        ),
        op(
            "DeleteAssetAdministrationShellDescriptorById",
            Delete,
            shell,
            vec![aas_id()],
        ),
        op(
            "GetAllSubmodelDescriptors",
            Get,
            "/submodel-descriptors",
            vec![limit(), cursor()],
        ),
        op(
            "PostSubmodelDescriptor",
            Post,
            "/submodel-descriptors",
            vec![body()],
        ),
        op(
            "GetSubmodelDescriptorById",
            Get,
            submodel,
            vec![submodel_id()],
        ),
        op(
            "PutSubmodelDescriptorById",
            Put,
            submodel,
            vec![submodel_id(), body()],
        ),
        op(
            "DeleteSubmodelDescriptorById",
            Delete,
            submodel,
            vec![submodel_id()],
        ),
    ]
}

fn concept_descriptions() -> Vec<Operation> {
    use Method::*;
    let one = "/concept-descriptions/{cdIdentifier}";
    vec![
        op(
            "GetAllConceptDescriptions",
            Get,
            "/concept-descriptions",
            vec![
                id_short(),
                encoded("isCaseOf"),
                encoded("dataSpecificationRef"),
                limit(),
                cursor(),
            ],
        ),
        op(
            "GetAllConceptDescriptionsByIdShort",
            Get,
            "/concept-descriptions",
            vec![id_short().required(), limit(), cursor()],
        ),
        op(
            "GetAllConceptDescriptionsByIsCaseOf",
            Get,
            "/concept-descriptions",
            vec![encoded("isCaseOf").required(), limit(), cursor()],
        ),
        op(
            "GetAllConceptDescriptionsByDataSpecificationReference",
            Get,
            "/concept-descriptions",
            vec![encoded("dataSpecificationRef").required(), limit(), cursor()],
        ),
        op(
            "PostConceptDescription",
            Post,
            "/concept-descriptions",
            vec![body()],
        ),
        op("GetConceptDescriptionById", Get, one, vec![id("cdIdentifier")]),
        op(
            "PutConceptDescriptionById",
            Put,
            one,
            vec![id("cdIdentifier"), body()],
        ),
        op(
            "DeleteConceptDescriptionById",
            Delete,
            one,
            vec![id("cdIdentifier")],
        ),
    ]
}

fn discovery() -> Vec<Operation> {
    use Method::*;
    let one = "/lookup/shells/{aasIdentifier}";
    vec![
        op(
            "GetAllAssetAdministrationShellIdsByAssetLink",
            Get,
            "/lookup/shells",
            vec![ids("assetIds"), limit(), cursor()],
        ),
        op("GetAllAssetLinksById", Get, one, vec![aas_id()]),
        op(
            "PostAllAssetLinksById",
            Post,
            one,
            vec![aas_id(), body()],
        ),
        op("DeleteAllAssetLinksById", Delete, one, vec![aas_id()]),
    ]
}

/// All operations in declaration order.
pub(crate) fn operations() -> Vec<Operation> {
    let mut all = Vec::new();
    all.extend(aas_repository());
    all.extend(aas_superpath());
    all.extend(submodel_superpath());
    all.extend(aas_interface());
    all.extend(submodel_interface());
    all.extend(submodel_repository());
    all.extend(serialization());
    all.extend(aasx_file_server());
    all.extend(registries());
    all.extend(concept_descriptions());
    all.extend(discovery());
    all.push(op("GetSelfDescription", Method::Get, "/description", vec![]));
    all
}
