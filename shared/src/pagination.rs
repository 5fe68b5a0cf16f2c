//! 分页纯函数模块
//!
//! 对已过滤的数据集做定长切片。页码从 1 开始，
//! 越界导航由调用方通过 [`total_pages`] 判定后拒绝。

/// 总页数 = ceil(len / page_size)，空数据集为 0
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// 取第 `page` 页（1 起）的可见窗口
///
/// 页码越界或 `page_size == 0` 时返回空切片。
pub fn page_slice<T>(data: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 || page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= data.len() {
        return &[];
    }
    let end = (start + page_size).min(data.len());
    &data[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(10, 3), 4);
        assert_eq!(total_pages(9, 3), 3);
        assert_eq!(total_pages(1, 8), 1);
    }

    #[test]
    fn test_total_pages_empty_dataset_is_zero() {
        assert_eq!(total_pages(0, 3), 0);
    }

    #[test]
    fn test_page_slice_windows() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        // 10 条、每页 3 条：第 1 页 = [0..3)，第 4 页 = [9..10)
        assert_eq!(page_slice(&data, 3, 1), &[1, 2, 3]);
        assert_eq!(page_slice(&data, 3, 2), &[4, 5, 6]);
        assert_eq!(page_slice(&data, 3, 4), &[10]);
    }

    #[test]
    fn test_page_slice_out_of_bounds_is_empty() {
        let data = [1, 2, 3];
        assert_eq!(page_slice(&data, 3, 0), &[] as &[i32]);
        assert_eq!(page_slice(&data, 3, 2), &[] as &[i32]);
        assert_eq!(page_slice::<i32>(&[], 3, 1), &[] as &[i32]);
    }

    #[test]
    fn test_zero_page_size_degrades_safely() {
        let data = [1, 2, 3];
        assert_eq!(total_pages(data.len(), 0), 0);
        assert_eq!(page_slice(&data, 0, 1), &[] as &[i32]);
    }
}
