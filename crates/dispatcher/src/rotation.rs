use tracing::debug;

/// 轮询选择器
///
/// 指针在多次选择之间保持，被跳过的账号不会重置指针；
/// 一整轮都没有可用账号时指针回到起点。
#[derive(Debug, Default, Clone)]
pub struct RoundRobinRotation {
    pointer: usize,
}

impl RoundRobinRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// 从当前指针开始选择下一个未被限流的账号
    pub fn next_eligible<F>(&mut self, workers: &[String], is_throttled: F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        if workers.is_empty() {
            debug!("没有可选择的账号");
            return None;
        }

        for _ in 0..workers.len() {
            let index = self.pointer % workers.len();
            self.pointer = (index + 1) % workers.len();
            let candidate = &workers[index];
            if is_throttled(candidate) {
                debug!("账号 {} 冷却中，跳过", candidate);
                continue;
            }
            debug!(
                "轮询选择账号: {} (索引: {}/{})",
                candidate,
                index,
                workers.len()
            );
            return Some(candidate.clone());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cyclic_order_without_cooldowns() {
        let mut rotation = RoundRobinRotation::new();
        let pool = workers(&["w1", "w2", "w3"]);
        let picked: Vec<String> = (0..7)
            .filter_map(|_| rotation.next_eligible(&pool, |_| false))
            .collect();
        assert_eq!(picked, workers(&["w1", "w2", "w3", "w1", "w2", "w3", "w1"]));
    }

    #[test]
    fn test_skips_throttled_workers() {
        let mut rotation = RoundRobinRotation::new();
        let pool = workers(&["w1", "w2", "w3"]);
        let picked: Vec<String> = (0..4)
            .filter_map(|_| rotation.next_eligible(&pool, |w| w == "w2"))
            .collect();
        assert_eq!(picked, workers(&["w1", "w3", "w1", "w3"]));
    }

    #[test]
    fn test_all_throttled_keeps_pointer() {
        let mut rotation = RoundRobinRotation::new();
        let pool = workers(&["w1", "w2", "w3"]);
        rotation.next_eligible(&pool, |_| false);
        assert_eq!(rotation.pointer(), 1);

        assert!(rotation.next_eligible(&pool, |_| true).is_none());
        assert_eq!(rotation.pointer(), 1);
        assert_eq!(rotation.next_eligible(&pool, |_| false).as_deref(), Some("w2"));
    }

    #[test]
    fn test_empty_pool() {
        let mut rotation = RoundRobinRotation::new();
        assert!(rotation.next_eligible(&[], |_| false).is_none());
    }
}
