// Sorting step procedures
//
// All five sorts share the same emission shape: mark the slots under
// consideration, bump the counters, record a snapshot, then mutate. The
// comparison count is incremented once per recorded comparison step, and
// the swap count only on actual element-position exchanges.

use super::StepEngine;
use crate::dataset::{ArrayElement, ElementStatus};

impl StepEngine {
    pub(super) fn bubble_sort(&mut self, elements: &mut Vec<ArrayElement>) {
        let len = elements.len();
        for i in 0..len {
            for j in 0..len - i - 1 {
                elements[j].status = ElementStatus::Comparing;
                elements[j + 1].status = ElementStatus::Comparing;
                self.metrics.comparisons += 1;
                self.record_array(elements);

                if elements[j].value > elements[j + 1].value {
                    elements.swap(j, j + 1);
                    self.metrics.swaps += 1;
                }

                elements[j].status = ElementStatus::Default;
                elements[j + 1].status = ElementStatus::Default;
            }
            // Largest remaining value has bubbled into its final slot.
            elements[len - i - 1].status = ElementStatus::Sorted;
        }
        self.record_array(elements);
    }

    pub(super) fn insertion_sort(&mut self, elements: &mut Vec<ArrayElement>) {
        for i in 1..elements.len() {
            let mut j = i;
            while j > 0 {
                elements[j - 1].status = ElementStatus::Comparing;
                elements[j].status = ElementStatus::Comparing;
                self.metrics.comparisons += 1;
                self.record_array(elements);

                let out_of_order = elements[j - 1].value > elements[j].value;
                if out_of_order {
                    elements.swap(j - 1, j);
                    self.metrics.swaps += 1;
                }

                elements[j - 1].status = ElementStatus::Default;
                elements[j].status = ElementStatus::Default;

                if !out_of_order {
                    break;
                }
                j -= 1;
            }
        }
        for element in elements.iter_mut() {
            element.status = ElementStatus::Sorted;
        }
        self.record_array(elements);
    }

    pub(super) fn selection_sort(&mut self, elements: &mut Vec<ArrayElement>) {
        let len = elements.len();
        for i in 0..len {
            let mut min = i;
            for j in i + 1..len {
                elements[min].status = ElementStatus::Comparing;
                elements[j].status = ElementStatus::Comparing;
                self.metrics.comparisons += 1;
                self.record_array(elements);

                let smaller = elements[j].value < elements[min].value;
                elements[min].status = ElementStatus::Default;
                elements[j].status = ElementStatus::Default;
                if smaller {
                    min = j;
                }
            }
            if min != i {
                elements.swap(i, min);
                self.metrics.swaps += 1;
            }
            elements[i].status = ElementStatus::Sorted;
        }
        self.record_array(elements);
    }

    pub(super) fn merge_sort(&mut self, elements: &mut Vec<ArrayElement>) {
        if !elements.is_empty() {
            let last = elements.len() - 1;
            self.merge_range(elements, 0, last);
        }
        for element in elements.iter_mut() {
            element.status = ElementStatus::Sorted;
        }
        self.record_array(elements);
    }

    fn merge_range(&mut self, elements: &mut Vec<ArrayElement>, left: usize, right: usize) {
        if left < right {
            let mid = (left + right) / 2;
            self.merge_range(elements, left, mid);
            self.merge_range(elements, mid + 1, right);
            self.merge(elements, left, mid, right);
        }
    }

    fn merge(&mut self, elements: &mut Vec<ArrayElement>, left: usize, mid: usize, right: usize) {
        let left_run: Vec<ArrayElement> = elements[left..=mid].to_vec();
        let right_run: Vec<ArrayElement> = elements[mid + 1..=right].to_vec();

        let mut i = 0;
        let mut j = 0;
        let mut k = left;
        while i < left_run.len() && j < right_run.len() {
            elements[k].status = ElementStatus::Comparing;
            self.metrics.comparisons += 1;
            self.record_array(elements);

            // `<=` keeps ties in the left run, preserving stability.
            if left_run[i].value <= right_run[j].value {
                elements[k] = left_run[i];
                i += 1;
            } else {
                elements[k] = right_run[j];
                j += 1;
            }
            elements[k].status = ElementStatus::Default;
            k += 1;
        }
        while i < left_run.len() {
            elements[k] = left_run[i];
            i += 1;
            k += 1;
        }
        while j < right_run.len() {
            elements[k] = right_run[j];
            j += 1;
            k += 1;
        }
        self.record_array(elements);
    }

    pub(super) fn quick_sort(&mut self, elements: &mut Vec<ArrayElement>) {
        if !elements.is_empty() {
            let last = elements.len() - 1;
            self.quick_range(elements, 0, last);
        }
        for element in elements.iter_mut() {
            element.status = ElementStatus::Sorted;
        }
        self.record_array(elements);
    }

    fn quick_range(&mut self, elements: &mut Vec<ArrayElement>, low: usize, high: usize) {
        if low < high {
            let p = self.partition(elements, low, high);
            if p > low {
                self.quick_range(elements, low, p - 1);
            }
            if p < high {
                self.quick_range(elements, p + 1, high);
            }
        } else {
            // Single-element partition is already in place.
            elements[low].status = ElementStatus::Sorted;
        }
    }

    /// Lomuto partition around the last element of the range.
    fn partition(&mut self, elements: &mut Vec<ArrayElement>, low: usize, high: usize) -> usize {
        let pivot = elements[high].value;
        elements[high].status = ElementStatus::Pivot;

        let mut i = low;
        for j in low..high {
            elements[j].status = ElementStatus::Comparing;
            self.metrics.comparisons += 1;
            self.record_array(elements);

            if elements[j].value < pivot {
                elements.swap(i, j);
                if i != j {
                    self.metrics.swaps += 1;
                }
                i += 1;
            }
            elements[j].status = ElementStatus::Default;
        }

        elements.swap(i, high);
        if i != high {
            self.metrics.swaps += 1;
        }
        elements[i].status = ElementStatus::Sorted;
        self.record_array(elements);
        i
    }
}
