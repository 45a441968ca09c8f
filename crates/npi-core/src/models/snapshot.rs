//! The persisted whole-board snapshot and its seeded defaults.

use jiff::Zoned;
use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::{ProcessStep, ProjectDetails, SpecDetails, StepType};

pub const DEFAULT_APP_TITLE: &str = "試產會議";
pub const DEFAULT_PROCESS_FLOW_TITLE: &str = "Manufacturing Process Flow";

/// Everything the board persists, written as one JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub app_title: String,
    pub project_details: ProjectDetails,
    pub specs: Vec<SpecDetails>,
    pub process_steps: Vec<ProcessStep>,
    pub process_flow_title: String,
    pub attendees: Vec<String>,
    pub meeting_date: String,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            project_details: ProjectDetails::default(),
            specs: default_specs(),
            process_steps: default_process_steps(),
            process_flow_title: DEFAULT_PROCESS_FLOW_TITLE.to_string(),
            attendees: Vec::new(),
            meeting_date: Zoned::now().date().to_string(),
        }
    }
}

/// Snapshot as read back from storage, where any field may be missing or
/// malformed.
///
/// Each field is decoded on its own. Missing or undecodable fields, and
/// empty title or date strings, fall back to their defaults one by one.
/// Within the lists (`specs`, `processSteps`, `attendees`) an undecodable entry is skipped and the
/// rest are kept.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSnapshot {
    app_title: Option<Value>,
    project_details: Option<Value>,
    specs: Option<Value>,
    process_steps: Option<Value>,
    process_flow_title: Option<Value>,
    attendees: Option<Value>,
    meeting_date: Option<Value>,
}

impl From<StoredSnapshot> for BoardSnapshot {
    fn from(stored: StoredSnapshot) -> Self {
        let defaults = BoardSnapshot::default();
        let text = |name: &str, value: Option<Value>| {
            field::<String>(name, value).filter(|s| !s.is_empty())
        };
        Self {
            app_title: text("appTitle", stored.app_title).unwrap_or(defaults.app_title),
            project_details: field("projectDetails", stored.project_details)
                .unwrap_or(defaults.project_details),
            specs: list("specs", stored.specs).unwrap_or(defaults.specs),
            process_steps: list("processSteps", stored.process_steps)
                .unwrap_or(defaults.process_steps),
            process_flow_title: text("processFlowTitle", stored.process_flow_title)
                .unwrap_or(defaults.process_flow_title),
            attendees: list("attendees", stored.attendees).unwrap_or(defaults.attendees),
            meeting_date: text("meetingDate", stored.meeting_date)
                .unwrap_or(defaults.meeting_date),
        }
    }
}

fn field<T: DeserializeOwned>(name: &str, value: Option<Value>) -> Option<T> {
    match serde_json::from_value(value?) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!("Ignoring stored {name}: {e}");
            None
        }
    }
}

fn list<T: DeserializeOwned>(name: &str, value: Option<Value>) -> Option<Vec<T>> {
    let entries: Vec<Value> = field(name, value)?;
    Some(
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    warn!("Skipping stored {name}[{index}]: {e}");
                    None
                }
            })
            .collect(),
    )
}

impl BoardSnapshot {
    /// An empty board: no specs, no steps, no attendees.
    pub fn empty() -> Self {
        Self {
            specs: Vec::new(),
            process_steps: Vec::new(),
            ..Self::default()
        }
    }
}

const DETAILS_PLACEHOLDER: &str = "Enter details here";
const NEW_VALUE: &str = "New Value";

/// Specs seeded on a fresh board.
pub fn default_specs() -> Vec<SpecDetails> {
    vec![
        SpecDetails::new(
            "spec-smt",
            "SMT Spec",
            [
                ("Total units", DETAILS_PLACEHOLDER),
                ("Top side", DETAILS_PLACEHOLDER),
                ("Bottom side", DETAILS_PLACEHOLDER),
            ],
        ),
        SpecDetails::new(
            "spec-dip-manual",
            "DIP Spec (manual)",
            [
                ("Relay pin", DETAILS_PLACEHOLDER),
                ("手焊零件", NEW_VALUE),
                ("插件", NEW_VALUE),
            ],
        ),
        SpecDetails::new("spec-test", "Test Spec", [("Test time", DETAILS_PLACEHOLDER)]),
        SpecDetails::new(
            "spec-pcb",
            "PCB Spec",
            [
                ("Layer Count", "Enter value"),
                ("Material", "e.g., FR-4"),
                ("Thickness", "e.g., 1.6mm"),
                ("Surface Finish", "e.g., ENIG"),
            ],
        ),
        SpecDetails::new(
            "spec-firmware",
            "Firmware Spec",
            [
                ("Version", "Enter version number"),
                ("Flashing Method", "e.g., JTAG, SWD"),
            ],
        ),
        SpecDetails::new(
            "spec-mechanical",
            "Mechanical Spec",
            [
                ("Enclosure Dimensions", "L x W x H mm"),
                ("Material", "e.g., ABS, Aluminum"),
                ("Finish", "e.g., Matte, Anodized"),
            ],
        ),
        SpecDetails::new(
            "spec-packaging",
            "Packaging Spec",
            [
                ("Box Type", "e.g., Corrugated"),
                ("Labeling Standard", "Enter details"),
                ("Units per Box", "Enter number"),
            ],
        ),
        SpecDetails::new(
            "spec-quality",
            "Quality & Inspection Spec",
            [
                ("AQL Level", "e.g., 0.65"),
                ("Cosmetic Standard", "Reference document"),
            ],
        ),
        SpecDetails::new(
            "spec-tooling",
            "Tooling & Fixture Spec",
            [
                ("Test Fixture ID", "Enter ID"),
                ("Assembly Jig", "Enter details"),
                ("Stencil Thickness", "e.g., 0.12mm"),
            ],
        ),
        SpecDetails::new(
            "spec-regulatory",
            "Regulatory Compliance",
            [
                ("RoHS", "Compliant / Non-compliant"),
                ("FCC / CE", "Required / Not Required"),
            ],
        ),
        SpecDetails::new(
            "spec-assembly",
            "Assembly Spec",
            [("torque", NEW_VALUE), ("Assembly Jig", NEW_VALUE)],
        ),
        SpecDetails::new(
            "spec-dip-general",
            "DIP Spec",
            [
                ("Total units", NEW_VALUE),
                ("Top side", NEW_VALUE),
                ("Bottom side", NEW_VALUE),
            ],
        ),
        SpecDetails::new(
            "spec-aoi-inspection",
            "AOI Inspection Spec",
            [("Inspection Coverage", "SMT components")],
        ),
        SpecDetails::new(
            "spec-aoi-photo",
            "AOI Photo Spec",
            [
                ("Resolution", "e.g., 10 megapixels"),
                ("Lighting", "e.g., Coaxial, Side"),
                ("File Format", "e.g., JPEG, PNG"),
            ],
        ),
        SpecDetails::new(
            "spec-wash",
            "Wash Spec",
            [("Cycle", NEW_VALUE), ("Temperature", NEW_VALUE), ("Time", NEW_VALUE)],
        ),
    ]
}

/// Process steps seeded on a fresh board, in flow order.
pub fn default_process_steps() -> Vec<ProcessStep> {
    use StepType::{Pack, Process, Qc, Test};

    let seeds: [(&str, &str, &str, StepType, Option<&str>); 17] = [
        ("step-1", "建BOM", "Bill of Materials creation and finalization.", Process, None),
        ("step-2", "料到", "Receiving and incoming inspection of all components.", Process, None),
        ("step-3", "PCB到", "Receiving and incoming inspection of bare PCBs.", Process, Some("spec-pcb")),
        ("step-4", "SMT", "Surface Mount Technology assembly process.", Process, Some("spec-smt")),
        ("step-6", "PF", "Press-fit component assembly.", Process, Some("spec-dip-general")),
        ("step-7", "手焊", "Manual soldering of specific components.", Process, Some("spec-dip-manual")),
        ("step-9", "插件", "manually Insertion", Process, Some("spec-dip-manual")),
        ("step-8", "水洗", "Washing, Cleaning PCBA to remove flux and contaminants.", Process, Some("spec-wash")),
        ("step-5", "SMT 目檢", "Visual inspection of SMT components and solder joints.", Qc, Some("spec-aoi-inspection")),
        ("step-10", "FPT", "Fly Probe testing.", Test, Some("spec-test")),
        ("step-11", "QC", "Final quality control checks.", Qc, Some("spec-quality")),
        ("step-12", "AOI 拍照", "Automated Optical Inspection and photography for documentation.", Qc, Some("spec-aoi-photo")),
        ("step-13", "Pack", "Prepare and package the final product for shipment.", Pack, Some("spec-packaging")),
        ("step-14", "出貨 (Shipping)", "Final product shipment.", Pack, None),
        ("step-aoi-inspect", "AOI Inspection", "Automated Optical Inspection of SMT assembly.", Qc, Some("spec-aoi-inspection")),
        ("step-15", "DIP", "Through-hole component insertion.", Process, Some("spec-dip-manual")),
        ("step-16", "Function Test", "Comprehensive functional testing.", Test, Some("spec-test")),
    ];

    seeds
        .into_iter()
        .map(|(id, name, details, step_type, spec)| {
            let step = ProcessStep::new(id, name, details, step_type);
            match spec {
                Some(spec_id) => step.with_spec(spec_id),
                None => step,
            }
        })
        .collect()
}
