// algoperf - Algorithm Performance Analysis
//
// Copyright (c) 2025 algoperf contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for report assembly.

use algoperf_core::{Aggregation, AlgorithmId, Dataset, OptimalPolicy, OptimalTable, QualityReport};
use algoperf_report::{PresentationConfig, Point, Report, ReportAssembler, ReportAxis, Scale};
use algoperf_test::fixtures::builders::{dataset, MeasurementBuilder};

fn assemble(ds: &Dataset, config: PresentationConfig) -> Report {
    let policy = OptimalPolicy::default();
    let aggregation = Aggregation::from_dataset(ds);
    let optimal = OptimalTable::from_aggregation(&aggregation, &policy);
    let quality = QualityReport::compute(&aggregation, &optimal, &policy);
    ReportAssembler::new(config).assemble(&aggregation, &optimal, &quality)
}

fn mixed_run() -> Dataset {
    dataset([
        MeasurementBuilder::new("brute-force").size(10).category("blocks").time_ms(12.0).memory_kb(3584.0).result(26.0),
        MeasurementBuilder::new("brute-force").size(10).category("random").time_ms(8.0).result(30.0),
        MeasurementBuilder::new("greedy1").size(10).category("blocks").time_ms(0.1).result(20.0),
        MeasurementBuilder::new("greedy1").size(10).category("random").time_ms(0.25).result(27.0),
        MeasurementBuilder::new("greedy1").size(10).category("random").time_ms(0.75).result(24.0),
        MeasurementBuilder::new("greedy1").size(100).category("random").time_ms(2.0).result(500.0),
    ])
}

#[test]
fn test_all_axes_present_in_order() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let axes: Vec<ReportAxis> = report.datasets.iter().map(|d| d.axis).collect();
    assert_eq!(axes, ReportAxis::ALL.to_vec());
}

#[test]
fn test_time_series_weighted_across_categories() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let time = report.dataset(ReportAxis::TimeVsSize).unwrap();
    let greedy1 = time.series("Greedy 1").unwrap();

    // blocks: 1 sample at 0.1; random: 2 samples with mean 0.5
    assert_eq!(greedy1.points.len(), 2);
    assert_eq!(greedy1.points[0].x, 10.0);
    assert!((greedy1.points[0].y - 1.1 / 3.0).abs() < 1e-12);
    assert_eq!(greedy1.points[1], Point::new(100.0, 2.0));
    assert_eq!(greedy1.color.as_deref(), Some("blue"));
    assert_eq!(time.y_axis.scale, Scale::Log);
    assert_eq!(time.y_axis.floor, Some(0.001));
}

#[test]
fn test_memory_series_omitted_without_data() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let memory = report.dataset(ReportAxis::MemoryVsSize).unwrap();
    assert_eq!(memory.series.len(), 1);
    assert_eq!(memory.series[0].label, "Brute Force");
    assert_eq!(memory.series[0].points, vec![Point::new(10.0, 3584.0)]);
}

#[test]
fn test_optimal_series_per_category() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let optimal = report.dataset(ReportAxis::OptimalVsSize).unwrap();
    let labels: Vec<&str> = optimal.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["blocks", "random"]);
    assert_eq!(optimal.series[1].points, vec![Point::new(10.0, 30.0)]);
}

#[test]
fn test_quality_labels_include_category_when_mixed() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let quality = report.dataset(ReportAxis::QualityVsSize).unwrap();
    let labels: Vec<&str> = quality.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Greedy 1 (blocks)", "Greedy 1 (random)"]);

    // No baseline at n = 100: no point, no gap filling.
    let random = quality.series("Greedy 1 (random)").unwrap();
    assert_eq!(random.points, vec![Point::new(10.0, 90.0)]);
}

#[test]
fn test_quality_labels_bare_with_one_category() {
    let ds = dataset([
        MeasurementBuilder::new("dynamic-programming").result(400.0),
        MeasurementBuilder::new("greedy2").result(300.0),
    ]);
    let report = assemble(&ds, PresentationConfig::default());
    let quality = report.dataset(ReportAxis::QualityVsSize).unwrap();
    assert_eq!(quality.series[0].label, "Greedy 2");
    assert_eq!(quality.series[0].points, vec![Point::new(10.0, 75.0)]);
}

#[test]
fn test_category_axis_for_one_algorithm() {
    let config = PresentationConfig {
        category_algorithm: Some(AlgorithmId::new("greedy1").unwrap()),
        ..PresentationConfig::default()
    };
    let report = assemble(&mixed_run(), config);
    let by_category = report.dataset(ReportAxis::TimeVsCategory).unwrap();

    let blocks = by_category.series("blocks").unwrap();
    assert_eq!(blocks.points, vec![Point::new(10.0, 0.1)]);
    let random = by_category.series("random").unwrap();
    assert_eq!(random.points.len(), 2);
    assert!(by_category.title.ends_with("Greedy 1"));
}

#[test]
fn test_category_axis_across_algorithms() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let by_category = report.dataset(ReportAxis::TimeVsCategory).unwrap();
    let blocks = by_category.series("blocks").unwrap();
    // brute-force 12.0 and greedy1 0.1, one sample each
    assert!((blocks.points[0].y - 6.05).abs() < 1e-12);
}

#[test]
fn test_efficiency_optional() {
    let config = PresentationConfig {
        include_efficiency: false,
        time_scale: Scale::Linear,
        ..PresentationConfig::default()
    };
    let report = assemble(&mixed_run(), config);
    assert!(report.dataset(ReportAxis::Efficiency).is_none());
    let time = report.dataset(ReportAxis::TimeVsSize).unwrap();
    assert_eq!(time.y_axis.floor, None);
}

#[test]
fn test_efficiency_sorted_by_time() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let efficiency = report.dataset(ReportAxis::Efficiency).unwrap();
    let greedy1 = efficiency.series("Greedy 1").unwrap();
    let xs: Vec<f64> = greedy1.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.1, 0.5, 2.0]);
}

#[test]
fn test_report_json_round_trip() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let json = report.to_json_pretty().unwrap();
    assert!(json.contains("\"time_vs_size\""));
    assert_eq!(Report::from_json(&json).unwrap(), report);
}

#[test]
fn test_time_series_identify_their_algorithm() {
    let report = assemble(&mixed_run(), PresentationConfig::default());
    let time = report.dataset(ReportAxis::TimeVsSize).unwrap();
    let algorithms: Vec<&str> = time
        .series
        .iter()
        .map(|s| s.algorithm.as_ref().unwrap().as_str())
        .collect();
    assert_eq!(algorithms, vec!["brute-force", "greedy1"]);
}
