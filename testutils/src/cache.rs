use std::hash::Hash;

use kube::Resource;
use kube::runtime::reflector::Store;
use kube::runtime::reflector::store::Writer;
use kube::runtime::watcher;

// Builds a reflector store that looks exactly like one whose initial list has completed, without
// needing an apiserver to watch.
pub fn synced_store<K>(objs: Vec<K>) -> Store<K>
where
    K: Resource + Clone + 'static,
    K::DynamicType: Default + Eq + Hash + Clone,
{
    synced_store_with(Default::default(), objs)
}

pub fn synced_store_with<K>(dyntype: K::DynamicType, objs: Vec<K>) -> Store<K>
where
    K: Resource + Clone + 'static,
    K::DynamicType: Eq + Hash + Clone,
{
    let mut writer = Writer::new(dyntype);
    writer.apply_watcher_event(&watcher::Event::Init);
    for obj in objs {
        writer.apply_watcher_event(&watcher::Event::InitApply(obj));
    }
    writer.apply_watcher_event(&watcher::Event::InitDone);
    writer.as_reader()
}

// The writer is returned so that the test controls whether the initial list ever completes; drop
// it to simulate a watch that died before the cache became ready.
pub fn unsynced_store<K>() -> (Store<K>, Writer<K>)
where
    K: Resource + Clone + 'static,
    K::DynamicType: Default + Eq + Hash + Clone,
{
    let writer = Writer::new(Default::default());
    (writer.as_reader(), writer)
}
